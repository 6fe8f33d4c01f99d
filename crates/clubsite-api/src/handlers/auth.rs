//! Auth handlers: login, logout, session.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use cookie::time::{Duration, OffsetDateTime};

use crate::dto::request::LoginRequest;
use crate::dto::response::{LoginResponse, MessageResponse, SessionResponse};
use crate::error::ApiResult;
use crate::extractors::{AppJson, SESSION_COOKIE, session_token};
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let session = state
        .authenticator
        .authenticate(&req.username, &req.password)
        .await?;

    let cookie = session_cookie(
        session.token.token.clone(),
        state.codec.ttl(),
        state.config.server.cookie_secure,
    );

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            expires_at: session.token.expires_at(),
            token: session.token.token,
            user: session.user.into(),
        }),
    ))
}

/// POST /api/auth/logout
///
/// Only clears the cookie. The token itself stays valid until it expires.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(cleared_session_cookie(state.config.server.cookie_secure));
    (jar, Json(MessageResponse::ok("Logged out")))
}

/// GET /api/auth/session
pub async fn session(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionResponse> {
    let claims = session_token(&headers).and_then(|token| state.codec.verify(&token).ok());
    Json(SessionResponse {
        authenticated: claims.is_some(),
        session: claims.map(Into::into),
    })
}

fn session_cookie(token: String, ttl: chrono::Duration, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::seconds(ttl.num_seconds()))
        .build()
}

fn cleared_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
