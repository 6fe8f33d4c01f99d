//! Seasons with embedded rosters.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use clubsite_core::error::AppError;
use clubsite_core::result::AppResult;
use clubsite_database::SeasonStore;
use clubsite_entity::season::{Season, SeasonInput};

use crate::context::RequestContext;
use crate::media::MediaService;

/// Handles seasons and their players.
#[derive(Clone)]
pub struct SeasonService {
    seasons: Arc<dyn SeasonStore>,
    media: MediaService,
}

impl std::fmt::Debug for SeasonService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeasonService").finish_non_exhaustive()
    }
}

impl SeasonService {
    /// Creates a new season service.
    pub fn new(seasons: Arc<dyn SeasonStore>, media: MediaService) -> Self {
        Self { seasons, media }
    }

    /// All seasons, most recent year first.
    pub async fn list(&self) -> AppResult<Vec<Season>> {
        self.seasons.list().await
    }

    /// Number of seasons.
    pub async fn count(&self) -> AppResult<u64> {
        self.seasons.count().await
    }

    /// Fetch one season.
    pub async fn get(&self, id: Uuid) -> AppResult<Season> {
        self.seasons
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Season not found"))
    }

    /// Create a season, uploading the team and player photos first.
    pub async fn create(&self, ctx: &RequestContext, input: SeasonInput) -> AppResult<Season> {
        let input = self.prepare(input).await?;
        let season = self.seasons.create(input).await?;
        info!(
            season_id = %season.id,
            year = %season.year,
            players = season.players.len(),
            actor = %ctx.username,
            "Season created"
        );
        Ok(season)
    }

    /// Replace a season's content.
    ///
    /// Photos are only uploaded once the season is known to exist. Hosted
    /// photos the new content no longer references are discarded.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        input: SeasonInput,
    ) -> AppResult<Season> {
        let existing = self.get(id).await?;
        let input = self.prepare(input).await?;
        let season = self
            .seasons
            .update(id, input)
            .await?
            .ok_or_else(|| AppError::not_found("Season not found"))?;

        let kept: HashSet<&str> = image_urls(&season).collect();
        for url in image_urls(&existing).filter(|url| !kept.contains(url)) {
            self.media.discard(Some(url)).await;
        }
        info!(season_id = %id, actor = %ctx.username, "Season updated");
        Ok(season)
    }

    /// Delete a season and its hosted photos.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        let existing = self.get(id).await?;
        if !self.seasons.delete(id).await? {
            return Err(AppError::not_found("Season not found"));
        }
        for url in image_urls(&existing) {
            self.media.discard(Some(url)).await;
        }
        info!(season_id = %id, actor = %ctx.username, "Season deleted");
        Ok(())
    }

    async fn prepare(&self, mut input: SeasonInput) -> AppResult<SeasonInput> {
        if input.year.trim().is_empty() || input.name.trim().is_empty() {
            return Err(AppError::validation("Year and name are required"));
        }
        input.image = self.media.resolve(input.image.take()).await?;
        for player in &mut input.players {
            player.image = self.media.resolve(player.image.take()).await?;
        }
        Ok(input)
    }
}

/// Team photo and player photos of a season.
fn image_urls(season: &Season) -> impl Iterator<Item = &str> {
    season
        .image
        .as_deref()
        .into_iter()
        .chain(season.players.iter().filter_map(|p| p.image.as_deref()))
}
