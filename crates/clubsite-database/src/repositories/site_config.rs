//! Site configuration repository implementation.
//!
//! The document lives in a single-row table (`id = 1`) as JSONB.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use clubsite_core::error::{AppError, ErrorKind};
use clubsite_core::result::AppResult;
use clubsite_entity::site_config::SiteConfig;

use crate::store::SiteConfigStore;

/// Repository for the site configuration document.
#[derive(Debug, Clone)]
pub struct SiteConfigRepository {
    pool: PgPool,
}

impl SiteConfigRepository {
    /// Create a new site configuration repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SiteConfigStore for SiteConfigRepository {
    async fn get(&self) -> AppResult<Option<SiteConfig>> {
        let row: Option<Json<SiteConfig>> =
            sqlx::query_scalar("SELECT data FROM site_config WHERE id = 1")
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to load site config", e)
                })?;
        Ok(row.map(|Json(config)| config))
    }

    async fn save(&self, config: &SiteConfig) -> AppResult<SiteConfig> {
        let Json(saved): Json<SiteConfig> = sqlx::query_scalar(
            "INSERT INTO site_config (id, data, updated_at) VALUES (1, $1, NOW()) \
             ON CONFLICT (id) DO UPDATE SET data = EXCLUDED.data, updated_at = NOW() \
             RETURNING data",
        )
        .bind(Json(config))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to save site config", e))?;
        Ok(saved)
    }

    async fn insert_if_absent(&self, config: &SiteConfig) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO site_config (id, data, updated_at) VALUES (1, $1, NOW()) \
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(Json(config))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed site config", e))?;
        Ok(result.rows_affected() > 0)
    }
}
