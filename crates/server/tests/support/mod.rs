#![allow(dead_code)]

use std::path::Path;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use configs::AppConfig;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const BASE: &str = configs::DEFAULT_BASE_PATH;

/// Config pointing at a SQLite file under `dir`, with latency switched off.
pub fn test_config(dir: &Path) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.database.url = format!("sqlite://{}?mode=rwc", dir.join("data").join("getsuite.db").display());
    cfg.mock.simulate_latency = false;
    cfg.server.port = 0;
    cfg
}

pub struct TestApp {
    pub router: Router,
    pub cfg: AppConfig,
    /// Holds the database file; dropped with the app.
    pub dir: TempDir,
}

pub async fn spawn_app() -> anyhow::Result<TestApp> {
    let dir = tempfile::tempdir()?;
    let cfg = test_config(dir.path());
    let router = server::startup::build_app(&cfg).await?;
    Ok(TestApp { router, cfg, dir })
}

impl TestApp {
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
        send(&self.router, method, uri, body).await
    }

    pub async fn create_customer(&self, name: &str) -> anyhow::Result<Value> {
        let body = serde_json::json!({"companyName": name, "email": format!("ap@{}.test", name.to_lowercase())});
        let (status, created) = self.send(Method::POST, &format!("{BASE}/customer"), Some(body)).await?;
        assert_eq!(status, StatusCode::CREATED);
        Ok(created)
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v)?))?,
        None => builder.body(Body::empty())?,
    };
    let resp = router.clone().oneshot(req).await?;
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
    let json = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, json))
}
