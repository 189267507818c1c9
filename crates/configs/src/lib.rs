use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/getsuite.db?mode=rwc";
pub const DEFAULT_BASE_PATH: &str = "/services/rest/record/v1";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub mock: MockConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_max_connections() -> u32 { 5 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Behaviour of the mock surface itself: where records are mounted and how
/// much artificial latency each request carries.
#[derive(Debug, Clone, Deserialize)]
pub struct MockConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,
    #[serde(default = "default_latency_min_ms")]
    pub latency_min_ms: u64,
    #[serde(default = "default_latency_max_ms")]
    pub latency_max_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            simulate_latency: default_simulate_latency(),
            latency_min_ms: default_latency_min_ms(),
            latency_max_ms: default_latency_max_ms(),
        }
    }
}

fn default_base_path() -> String { DEFAULT_BASE_PATH.to_string() }
fn default_simulate_latency() -> bool { true }
fn default_latency_min_ms() -> u64 { 50 }
fn default_latency_max_ms() -> u64 { 300 }

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

impl AppConfig {
    /// Config at `CONFIG_PATH` (default `config.toml`), or environment
    /// defaults when that file does not exist.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// A missing file falls back to the environment; an unreadable or
    /// malformed one is an error.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str::<AppConfig>(&content)
                .map_err(|e| anyhow!("invalid config file {path}: {e}"))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::from_env(),
            Err(e) => return Err(anyhow!("cannot read config file {path}: {e}")),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        // only the listener and runtime size come from the environment here;
        // DATABASE_URL is picked up during normalisation
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .or(cfg.server.worker_threads);
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        // server: host fallback, port range, worker count
        self.server.normalize()?;
        // database: URL from env when blank, then pool sanity
        self.database.normalize_from_env();
        self.database.validate()?;
        // mock: base path shape and latency bounds
        self.mock.normalize_and_validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Fill the URL from `DATABASE_URL` when the file leaves it empty, then
    /// fall back to the local SQLite file.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        if !self.url.to_lowercase().starts_with("sqlite:") {
            return Err(anyhow!("database.url must be a sqlite: URL"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl MockConfig {
    fn normalize_and_validate(&mut self) -> Result<()> {
        let trimmed = self.base_path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(anyhow!("mock.base_path must not be empty or '/'"));
        }
        self.base_path = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        if self.latency_min_ms > self.latency_max_ms {
            return Err(anyhow!("mock.latency_min_ms must be <= mock.latency_max_ms"));
        }
        Ok(())
    }
}
