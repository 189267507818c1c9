//! Runtime environment helpers
//!
//! Thin wrapper around `common::env` to keep binary crates importing
//! `service::runtime::ensure_env` without depending directly on `common`.

/// Ensure the directory backing the SQLite file exists.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    common::env::ensure_env(database_url).await
}
