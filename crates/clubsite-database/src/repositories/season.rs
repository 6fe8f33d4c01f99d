//! Season repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use clubsite_core::error::{AppError, ErrorKind};
use clubsite_core::result::AppResult;
use clubsite_entity::season::{Season, SeasonInput};

use crate::store::SeasonStore;

/// Repository for seasons and their rosters.
#[derive(Debug, Clone)]
pub struct SeasonRepository {
    pool: PgPool,
}

impl SeasonRepository {
    /// Create a new season repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, year: &str, action: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("seasons_year_key") => {
            AppError::conflict(format!("Season '{year}' already exists")).with_code("SEASON_EXISTS")
        }
        _ => AppError::with_source(ErrorKind::Database, action, e),
    }
}

#[async_trait]
impl SeasonStore for SeasonRepository {
    async fn list(&self) -> AppResult<Vec<Season>> {
        sqlx::query_as::<_, Season>("SELECT * FROM seasons ORDER BY year DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list seasons", e))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM seasons")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count seasons", e)
            })?;
        Ok(total as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Season>> {
        sqlx::query_as::<_, Season>("SELECT * FROM seasons WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find season", e))
    }

    async fn create(&self, data: SeasonInput) -> AppResult<Season> {
        let season = data.into_season();
        sqlx::query_as::<_, Season>(
            "INSERT INTO seasons (id, year, name, description, image, players, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(season.id)
        .bind(&season.year)
        .bind(&season.name)
        .bind(&season.description)
        .bind(&season.image)
        .bind(&season.players)
        .bind(season.created_at)
        .bind(season.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &season.year, "Failed to create season"))
    }

    async fn update(&self, id: Uuid, data: SeasonInput) -> AppResult<Option<Season>> {
        let year = data.year.clone();
        sqlx::query_as::<_, Season>(
            "UPDATE seasons SET year = $2, name = $3, description = $4, image = $5, \
             players = $6, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.year)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image)
        .bind(sqlx::types::Json(&data.players))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, &year, "Failed to update season"))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM seasons WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete season", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
