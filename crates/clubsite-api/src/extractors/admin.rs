//! `AdminUser` extractor: verifies the session token and requires the admin role.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use clubsite_core::error::AppError;
use clubsite_service::context::RequestContext;

use super::session::session_token;
use crate::error::ApiError;
use crate::state::AppState;

/// Authenticated administrator making the request.
#[derive(Debug, Clone)]
pub struct AdminUser(pub RequestContext);

impl std::ops::Deref for AdminUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers)
            .ok_or_else(|| AppError::authentication("Authentication required"))?;

        let claims = state.codec.verify(&token)?;
        if !claims.is_admin() {
            return Err(AppError::authorization("Administrator role required").into());
        }

        Ok(AdminUser(RequestContext::new(
            claims.user_id(),
            claims.username,
            claims.role,
        )))
    }
}
