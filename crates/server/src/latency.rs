//! Artificial response delay so clients see realistic round-trip times.
use std::time::Duration;

use axum::{extract::{Request, State}, middleware::Next, response::Response};
use rand::Rng;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct LatencyConfig {
    pub enabled: bool,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl LatencyConfig {
    pub fn disabled() -> Self {
        Self { enabled: false, min_ms: 0, max_ms: 0 }
    }

    /// Uniform delay within `min_ms..=max_ms`, or `None` when switched off.
    pub fn sample(&self) -> Option<Duration> {
        if !self.enabled || self.max_ms == 0 {
            return None;
        }
        let ms = rand::thread_rng().gen_range(self.min_ms.min(self.max_ms)..=self.max_ms);
        Some(Duration::from_millis(ms))
    }
}

impl From<&configs::MockConfig> for LatencyConfig {
    fn from(m: &configs::MockConfig) -> Self {
        Self { enabled: m.simulate_latency, min_ms: m.latency_min_ms, max_ms: m.latency_max_ms }
    }
}

pub async fn simulate_latency(State(cfg): State<LatencyConfig>, req: Request, next: Next) -> Response {
    if let Some(delay) = cfg.sample() {
        debug!(delay_ms = delay.as_millis() as u64, "simulated_latency");
        tokio::time::sleep(delay).await;
    }
    next.run(req).await
}
