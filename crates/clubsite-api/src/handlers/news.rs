//! News handlers. Reads are public; writes require an admin session.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use clubsite_core::error::AppError;
use clubsite_entity::news::News;

use crate::dto::request::{BulkPublishRequest, CreateNewsRequest, DeleteNewsQuery, UpdateNewsRequest};
use crate::dto::response::{BulkPublishResponse, CountResponse, MessageResponse, NewsListResponse};
use crate::error::ApiResult;
use crate::extractors::path::parse_uuid;
use crate::extractors::{AdminUser, AppJson, NewsListParams, ValidatedJson};
use crate::state::AppState;

/// GET /api/news
pub async fn list_news(
    State(state): State<AppState>,
    query: Result<Query<NewsListParams>, QueryRejection>,
) -> ApiResult<Json<NewsListResponse>> {
    let Query(params) = query?;
    let page = state
        .news_service
        .list(params.published_filter(), params.page_request())
        .await?;
    Ok(Json(page.into()))
}

/// GET /api/news/count
pub async fn count_news(State(state): State<AppState>) -> ApiResult<Json<CountResponse>> {
    let count = state.news_service.count().await?;
    Ok(Json(CountResponse {
        count,
        success: true,
    }))
}

/// GET /api/news/{id}
pub async fn get_news(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<News>> {
    let id = parse_uuid(&id)?;
    Ok(Json(state.news_service.get(id).await?))
}

/// POST /api/news
pub async fn create_news(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(req): ValidatedJson<CreateNewsRequest>,
) -> ApiResult<(StatusCode, Json<News>)> {
    let news = state.news_service.create(&admin, req.into()).await?;
    Ok((StatusCode::CREATED, Json(news)))
}

/// PUT /api/news
pub async fn bulk_publish(
    State(state): State<AppState>,
    admin: AdminUser,
    AppJson(req): AppJson<BulkPublishRequest>,
) -> ApiResult<Json<BulkPublishResponse>> {
    let modified = state
        .news_service
        .set_published(&admin, &req.ids, req.is_published)
        .await?;
    Ok(Json(BulkPublishResponse {
        modified,
        success: true,
    }))
}

/// DELETE /api/news?id=...
pub async fn delete_news_by_query(
    State(state): State<AppState>,
    admin: AdminUser,
    query: Result<Query<DeleteNewsQuery>, QueryRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Query(query) = query?;
    let id = query
        .id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::validation("News id is required"))?;
    let id = parse_uuid(id)?;

    state.news_service.delete(&admin, id).await?;
    Ok(Json(MessageResponse::ok("News deleted")))
}

/// PUT /api/news/{id}
pub async fn update_news(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateNewsRequest>,
) -> ApiResult<Json<News>> {
    let id = parse_uuid(&id)?;
    let news = state.news_service.update(&admin, id, req.into()).await?;
    Ok(Json(news))
}

/// DELETE /api/news/{id}
pub async fn delete_news(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_uuid(&id)?;
    state.news_service.delete(&admin, id).await?;
    Ok(Json(MessageResponse::ok("News deleted")))
}
