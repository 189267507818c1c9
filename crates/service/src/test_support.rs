#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

/// Migrated SQLite database in a private directory; dropping the `TempDir` removes it.
pub async fn get_db() -> Result<(TempDir, DatabaseConnection), anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("service.db").display());
    let db = connect_with_config(&DatabaseConfig::from_url(url)).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((dir, db))
}
