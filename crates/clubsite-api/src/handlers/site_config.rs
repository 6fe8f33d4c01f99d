//! Site configuration handlers.

use axum::Json;
use axum::extract::State;

use clubsite_core::error::AppError;
use clubsite_entity::site_config::{SiteConfig, SiteConfigUpdate};

use crate::error::ApiResult;
use crate::extractors::{AdminUser, AppJson};
use crate::state::AppState;

/// GET /api/site-config
pub async fn get_site_config(State(state): State<AppState>) -> ApiResult<Json<SiteConfig>> {
    let config = state
        .site_config_service
        .get()
        .await?
        .ok_or_else(|| AppError::not_found("Site configuration not found"))?;
    Ok(Json(config))
}

/// PUT /api/site-config
pub async fn update_site_config(
    State(state): State<AppState>,
    admin: AdminUser,
    AppJson(update): AppJson<SiteConfigUpdate>,
) -> ApiResult<Json<SiteConfig>> {
    let config = state.site_config_service.update(&admin, update).await?;
    Ok(Json(config))
}
