//! Season handlers. Reads are public; writes require an admin session.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use clubsite_entity::season::Season;

use crate::dto::request::SeasonRequest;
use crate::dto::response::{CountResponse, MessageResponse, SeasonListResponse};
use crate::error::ApiResult;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AdminUser, ValidatedJson};
use crate::state::AppState;

/// GET /api/seasons
pub async fn list_seasons(State(state): State<AppState>) -> ApiResult<Json<SeasonListResponse>> {
    let seasons = state.season_service.list().await?;
    Ok(Json(SeasonListResponse { seasons }))
}

/// GET /api/seasons/count
pub async fn count_seasons(State(state): State<AppState>) -> ApiResult<Json<CountResponse>> {
    let count = state.season_service.count().await?;
    Ok(Json(CountResponse {
        count,
        success: true,
    }))
}

/// GET /api/seasons/{id}
pub async fn get_season(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Season>> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.season_service.get(id).await?))
}

/// POST /api/seasons
pub async fn create_season(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(req): ValidatedJson<SeasonRequest>,
) -> ApiResult<(StatusCode, Json<Season>)> {
    let season = state.season_service.create(&admin, req.into()).await?;
    Ok((StatusCode::CREATED, Json(season)))
}

/// PUT /api/seasons/{id}
pub async fn update_season(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    ValidatedJson(req): ValidatedJson<SeasonRequest>,
) -> ApiResult<Json<Season>> {
    let id = parse_uuid(&id)?;
    let season = state.season_service.update(&admin, id, req.into()).await?;
    Ok(Json(season))
}

/// DELETE /api/seasons/{id}
pub async fn delete_season(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_uuid(&id)?;
    state.season_service.delete(&admin, id).await?;
    Ok(Json(MessageResponse::ok("Season deleted")))
}
