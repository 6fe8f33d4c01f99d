//! In-memory season store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use clubsite_core::error::AppError;
use clubsite_core::result::AppResult;
use clubsite_entity::season::{Season, SeasonInput};

use crate::store::SeasonStore;

/// Seasons keyed by id.
#[derive(Debug, Default)]
pub struct MemorySeasonStore {
    items: RwLock<HashMap<Uuid, Season>>,
}

impl MemorySeasonStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn year_taken(year: &str) -> AppError {
    AppError::conflict(format!("Season '{year}' already exists")).with_code("SEASON_EXISTS")
}

#[async_trait]
impl SeasonStore for MemorySeasonStore {
    async fn list(&self) -> AppResult<Vec<Season>> {
        let mut seasons: Vec<Season> = self.items.read().await.values().cloned().collect();
        seasons.sort_by(|a, b| b.year.cmp(&a.year));
        Ok(seasons)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.items.read().await.len() as u64)
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Season>> {
        Ok(self.items.read().await.get(&id).cloned())
    }

    async fn create(&self, data: SeasonInput) -> AppResult<Season> {
        let mut items = self.items.write().await;
        if items.values().any(|s| s.year == data.year) {
            return Err(year_taken(&data.year));
        }
        let season = data.into_season();
        items.insert(season.id, season.clone());
        Ok(season)
    }

    async fn update(&self, id: Uuid, data: SeasonInput) -> AppResult<Option<Season>> {
        let mut items = self.items.write().await;
        if items.values().any(|s| s.id != id && s.year == data.year) {
            return Err(year_taken(&data.year));
        }
        Ok(items.get_mut(&id).map(|season| {
            data.apply_to(season);
            season.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> AppResult<bool> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}
