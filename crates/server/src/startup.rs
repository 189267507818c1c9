use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::ServerState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &configs::ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Open the store, bring the schema up to date and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    runtime::ensure_env(&cfg.database.url).await?;
    let db = connect_with_config(&DatabaseConfig::from(&cfg.database)).await?;
    migration::Migrator::up(&db, None).await?;
    info!(url = %cfg.database.url, "database ready");
    Ok(routes::build_router(ServerState::new(db), &cfg.mock, build_cors()))
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg.server)?;
    info!(%addr, base_path = %cfg.mock.base_path, latency = cfg.mock.simulate_latency, "starting mock record api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
