//! News repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubsite_core::error::{AppError, ErrorKind};
use clubsite_core::result::AppResult;
use clubsite_core::types::pagination::{PageRequest, PageResponse};
use clubsite_entity::news::{CreateNews, News, UpdateNews};

use crate::store::NewsStore;

/// Repository for news articles.
#[derive(Debug, Clone)]
pub struct NewsRepository {
    pool: PgPool,
}

impl NewsRepository {
    /// Create a new news repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NewsStore for NewsRepository {
    async fn list(
        &self,
        published: Option<bool>,
        page: PageRequest,
    ) -> AppResult<PageResponse<News>> {
        let total = self.count(published).await?;

        let items = sqlx::query_as::<_, News>(
            "SELECT * FROM news WHERE ($1::BOOLEAN IS NULL OR is_published = $1) \
             ORDER BY published_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(published)
        .bind(page.limit as i64)
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list news", e))?;

        Ok(PageResponse::new(items, page, total))
    }

    async fn count(&self, published: Option<bool>) -> AppResult<u64> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM news WHERE ($1::BOOLEAN IS NULL OR is_published = $1)")
                .bind(published)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count news", e)
                })?;
        Ok(total as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<News>> {
        sqlx::query_as::<_, News>("SELECT * FROM news WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find news", e))
    }

    async fn create(&self, data: CreateNews) -> AppResult<News> {
        let news = data.into_news();
        sqlx::query_as::<_, News>(
            "INSERT INTO news (id, title, content, image, is_published, published_at, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(news.id)
        .bind(&news.title)
        .bind(&news.content)
        .bind(&news.image)
        .bind(news.is_published)
        .bind(news.published_at)
        .bind(news.created_at)
        .bind(news.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create news", e))
    }

    async fn update(&self, id: Uuid, data: UpdateNews) -> AppResult<Option<News>> {
        sqlx::query_as::<_, News>(
            "UPDATE news SET title = COALESCE($2, title), \
             content = COALESCE($3, content), \
             image = COALESCE($4, image), \
             is_published = COALESCE($5, is_published), \
             updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.image)
        .bind(data.is_published)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update news", e))
    }

    async fn set_published(&self, ids: &[Uuid], is_published: bool) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE news SET is_published = $1, updated_at = NOW() WHERE id = ANY($2)",
        )
        .bind(is_published)
        .bind(ids)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update publication state", e)
        })?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete news", e))?;
        Ok(result.rows_affected() > 0)
    }
}
