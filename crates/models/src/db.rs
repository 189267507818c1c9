use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::debug;

/// Pool settings used to open the store.
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    pub acquire_timeout: Duration,
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// Default pool settings for `url`.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self::from(&configs::DatabaseConfig { url: url.into(), ..Default::default() })
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

fn is_sqlite(url: &str) -> bool {
    url.to_ascii_lowercase().starts_with("sqlite:")
}

/// Pool size actually opened. SQLite gets a single connection: deferred
/// transactions that read then write fail with SQLITE_BUSY when two of them
/// overlap, so writers queue on the pool instead.
pub fn effective_pool_size(cfg: &DatabaseConfig) -> (u32, u32) {
    if is_sqlite(&cfg.url) {
        (1, 1)
    } else {
        (cfg.max_connections, cfg.min_connections.min(cfg.max_connections))
    }
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let (max, min) = effective_pool_size(cfg);
    if max != cfg.max_connections {
        debug!(configured = cfg.max_connections, max, "sqlite pool limited to one connection");
    }
    let mut opts = ConnectOptions::new(cfg.url.clone());
    opts.max_connections(max)
        .min_connections(min)
        .connect_timeout(cfg.connect_timeout)
        .idle_timeout(cfg.idle_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opts).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_pool_is_single_connection() {
        let mut cfg = DatabaseConfig::from_url("sqlite://data/x.db?mode=rwc");
        cfg.max_connections = 8;
        assert_eq!(effective_pool_size(&cfg), (1, 1));
    }

    #[test]
    fn other_backends_keep_configured_pool() {
        let cfg = DatabaseConfig::from_url("postgres://localhost/db");
        assert_eq!(effective_pool_size(&cfg), (5, 1));
    }
}
