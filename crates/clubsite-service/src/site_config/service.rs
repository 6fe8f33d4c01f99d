//! Reading, seeding, and partially updating the site configuration.

use std::sync::Arc;

use tracing::info;

use clubsite_core::result::AppResult;
use clubsite_database::SiteConfigStore;
use clubsite_entity::site_config::{SiteConfig, SiteConfigUpdate};

use crate::context::RequestContext;
use crate::media::MediaService;

/// Handles the singleton site configuration.
#[derive(Clone)]
pub struct SiteConfigService {
    store: Arc<dyn SiteConfigStore>,
    media: MediaService,
}

impl std::fmt::Debug for SiteConfigService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfigService").finish_non_exhaustive()
    }
}

impl SiteConfigService {
    /// Creates a new site configuration service.
    pub fn new(store: Arc<dyn SiteConfigStore>, media: MediaService) -> Self {
        Self { store, media }
    }

    /// The stored configuration, if it has been seeded.
    pub async fn get(&self) -> AppResult<Option<SiteConfig>> {
        self.store.get().await
    }

    /// Write the default club configuration unless one exists. Returns
    /// whether it was written.
    pub async fn ensure_defaults(&self) -> AppResult<bool> {
        let created = self.store.insert_if_absent(&SiteConfig::default()).await?;
        if created {
            info!("Default site configuration created");
        }
        Ok(created)
    }

    /// Merge `update` into the stored document, creating it from the
    /// defaults when absent.
    ///
    /// `logo`, `home_image` and `about_image` given as `data:` URLs are
    /// uploaded; a failed upload is logged and leaves that field unchanged.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        mut update: SiteConfigUpdate,
    ) -> AppResult<SiteConfig> {
        update.logo = self.media.resolve_lenient("logo", update.logo.take()).await;
        update.home_image = self
            .media
            .resolve_lenient("home_image", update.home_image.take())
            .await;
        update.about_image = self
            .media
            .resolve_lenient("about_image", update.about_image.take())
            .await;

        let mut config = self.store.get().await?.unwrap_or_default();
        update.apply_to(&mut config);
        let saved = self.store.save(&config).await?;

        info!(actor = %ctx.username, "Site configuration updated");
        Ok(saved)
    }
}
