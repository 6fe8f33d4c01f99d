//! In-memory site configuration store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use clubsite_core::result::AppResult;
use clubsite_entity::site_config::SiteConfig;

use crate::store::SiteConfigStore;

/// Holds at most one configuration document.
#[derive(Debug, Default)]
pub struct MemorySiteConfigStore {
    document: RwLock<Option<SiteConfig>>,
}

impl MemorySiteConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SiteConfigStore for MemorySiteConfigStore {
    async fn get(&self) -> AppResult<Option<SiteConfig>> {
        Ok(self.document.read().await.clone())
    }

    async fn save(&self, config: &SiteConfig) -> AppResult<SiteConfig> {
        *self.document.write().await = Some(config.clone());
        Ok(config.clone())
    }

    async fn insert_if_absent(&self, config: &SiteConfig) -> AppResult<bool> {
        let mut document = self.document.write().await;
        if document.is_some() {
            return Ok(false);
        }
        *document = Some(config.clone());
        Ok(true)
    }
}
