//! Application builder: wires router, middleware, and state into an Axum app.

use axum::Router;
use axum::middleware as axum_middleware;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use clubsite_core::config::AppConfig;
use clubsite_core::error::{AppError, ErrorKind};
use clubsite_database::{DatabasePool, Stores};
use clubsite_service::MediaService;

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(request_logging))
}

/// Runs the server until Ctrl-C.
///
/// The caller owns `db_pool` and closes it once this returns.
pub async fn run_server(
    config: AppConfig,
    stores: Stores,
    db_pool: Option<DatabasePool>,
) -> Result<(), AppError> {
    let media = MediaService::from_config(&config.media)?;
    info!(provider = media.provider_name(), "Image hosting ready");

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, stores, media, db_pool)?;
    let app = build_app(state);

    let listener = TcpListener::bind(&addr).await.map_err(|e| {
        AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
    })?;
    info!(%addr, "Club site server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Server error", e))?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    }
}
