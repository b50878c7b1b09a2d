use std::path::Path;

use axum::Router;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load `CONFIG_PATH` (default `config.toml`). Without a config file the
/// settings come from `SERVER_HOST`, `SERVER_PORT` and `DATABASE_URL`.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let path = configs::config_path();
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate();
    }
    warn!(%path, "config file not found, using environment variables");
    AppConfig::from_env()
}

pub fn build_state(db: DatabaseConnection) -> ServerState {
    ServerState::from_db(db)
}

/// Router with the default CORS policy, as served by [`run`].
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

/// Connect, migrate and serve the villa API until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_and_migrate(&cfg.database).await?;
    let app = build_app(build_state(db));

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %listener.local_addr()?, "villa api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("villa api stopped");
    Ok(())
}
