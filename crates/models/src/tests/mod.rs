use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use crate::db::{connect_with_config, DatabaseConfig};

/// Customer CRUD against a real SQLite file
pub mod crud_tests;

/// Sales order creation rules and the customer delete policy
pub mod relation_tests;

/// Fresh migrated database in its own directory; keep the `TempDir` alive for the test.
pub async fn fresh_db() -> anyhow::Result<(TempDir, DatabaseConnection)> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("models.db").display());
    let db = connect_with_config(&DatabaseConfig::from_url(url)).await?;
    migration::Migrator::up(&db, None).await?;
    Ok((dir, db))
}
