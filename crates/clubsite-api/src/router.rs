//! Route definitions for the club site.
//!
//! JSON endpoints are mounted under `/api`; every other path is served from
//! the static site directory. The admin guard runs in front of both.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use clubsite_core::error::AppError;

use crate::error::ApiError;
use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes, the admin guard, and the body limit.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let static_files =
        ServeDir::new(&state.config.server.static_dir).append_index_html_on_directories(true);

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(setup_routes())
        .merge(news_routes())
        .merge(season_routes())
        .merge(site_config_routes())
        .merge(health_routes())
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(static_files)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::guard::admin_guard,
        ))
        .layer(DefaultBodyLimit::max(max_body))
        .with_state(state)
}

/// Auth endpoints: login, logout, session
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/session", get(handlers::auth::session))
}

/// First-run endpoints
fn setup_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/setup",
            get(handlers::setup::status).post(handlers::setup::bootstrap),
        )
        .route("/setup/verify", post(handlers::setup::verify_setup_key))
        .route("/initialize", get(handlers::setup::initialize))
}

/// News CRUD and bulk publication
fn news_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/news",
            get(handlers::news::list_news)
                .post(handlers::news::create_news)
                .put(handlers::news::bulk_publish)
                .delete(handlers::news::delete_news_by_query),
        )
        .route("/news/count", get(handlers::news::count_news))
        .route(
            "/news/{id}",
            get(handlers::news::get_news)
                .put(handlers::news::update_news)
                .delete(handlers::news::delete_news),
        )
}

/// Seasons and rosters
fn season_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/seasons",
            get(handlers::season::list_seasons).post(handlers::season::create_season),
        )
        .route("/seasons/count", get(handlers::season::count_seasons))
        .route(
            "/seasons/{id}",
            get(handlers::season::get_season)
                .put(handlers::season::update_season)
                .delete(handlers::season::delete_season),
        )
}

/// Site configuration document
fn site_config_routes() -> Router<AppState> {
    Router::new().route(
        "/site-config",
        get(handlers::site_config::get_site_config).put(handlers::site_config::update_site_config),
    )
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

async fn api_not_found() -> ApiError {
    AppError::not_found("No such API endpoint").into()
}
