//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

/// Filesystem path of a `sqlite:` URL, or `None` for in-memory databases.
pub fn sqlite_file_path(url: &str) -> Option<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Ensure the directory holding the SQLite file exists.
pub async fn ensure_env(database_url: &str) -> anyhow::Result<()> {
    let Some(file) = sqlite_file_path(database_url) else {
        warn!(%database_url, "database is not file-backed; records will not survive a restart");
        return Ok(());
    };
    let dir = file.parent().unwrap_or_else(|| Path::new(""));
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", dir.display()))?;
    info!(dir = %dir.display(), "data directory ready");
    Ok(())
}
