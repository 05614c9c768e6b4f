use std::path::Path;

use axum::Router;
use configs::AppConfig;
use service::{seed, storage::JsonDocumentStore};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open the document store, seed it if configured, and build the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let data_file = Path::new(&cfg.storage.data_file);
    let store = JsonDocumentStore::new(data_file).await?;
    if cfg.storage.seed_on_boot {
        seed::seed_if_empty(&store).await?;
    }

    let state = AppState::from_store(store);
    Ok(routes::build_router(state, build_cors()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; running until killed");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg).await?;

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, data_file = %cfg.storage.data_file, "starting claims server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
