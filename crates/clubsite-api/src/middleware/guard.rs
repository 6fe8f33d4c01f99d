//! Page guard middleware for the admin area.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use clubsite_auth::GuardDecision;

use crate::extractors::session_token;
use crate::state::AppState;

/// Runs the route guard in front of every request.
///
/// Protected admin pages without a valid session are redirected to the login
/// page with the requested target as `callbackUrl`; the login page with a
/// valid session is redirected to the dashboard.
pub async fn admin_guard(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let target = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_string(), |pq| pq.as_str().to_string());
    let token = session_token(request.headers());

    match state.guard.decide(&target, token.as_deref()) {
        GuardDecision::Allow => next.run(request).await,
        GuardDecision::RedirectTo(location) => {
            debug!(path = %request.uri().path(), location = %location, "Guard redirect");
            Redirect::temporary(&location).into_response()
        }
    }
}
