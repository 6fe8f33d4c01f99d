//! Turns image fields from admin forms into hosted URLs.

use std::sync::Arc;

use tracing::warn;

use clubsite_core::config::MediaConfig;
use clubsite_core::result::AppResult;
use clubsite_core::traits::media::ImageUploader;

use super::cloudinary::CloudinaryUploader;
use super::data_url::is_data_url;
use super::disabled::DisabledUploader;

/// Resolves `data:` URLs to hosted images and discards replaced ones.
#[derive(Debug, Clone)]
pub struct MediaService {
    uploader: Arc<dyn ImageUploader>,
}

impl MediaService {
    /// Wraps an uploader.
    pub fn new(uploader: Arc<dyn ImageUploader>) -> Self {
        Self { uploader }
    }

    /// Picks Cloudinary when credentials are configured, otherwise the
    /// disabled uploader.
    pub fn from_config(config: &MediaConfig) -> AppResult<Self> {
        let uploader: Arc<dyn ImageUploader> = if config.is_configured() {
            Arc::new(CloudinaryUploader::new(config)?)
        } else {
            warn!("Media credentials not configured, image uploads are disabled");
            Arc::new(DisabledUploader)
        };
        Ok(Self::new(uploader))
    }

    /// Name of the active provider.
    pub fn provider_name(&self) -> &str {
        self.uploader.provider_name()
    }

    /// Upload `value` when it is a `data:` URL. Hosted URLs and `None` pass
    /// through unchanged; upload failures are returned.
    pub async fn resolve(&self, value: Option<String>) -> AppResult<Option<String>> {
        match value {
            Some(v) if is_data_url(&v) => Ok(Some(self.uploader.upload(&v).await?.url)),
            other => Ok(other),
        }
    }

    /// Like [`resolve`](Self::resolve), but an upload failure is logged and
    /// yields `None` so the caller leaves the field untouched.
    pub async fn resolve_lenient(&self, field: &str, value: Option<String>) -> Option<String> {
        match self.resolve(value).await {
            Ok(resolved) => resolved,
            Err(e) => {
                warn!(field, error = %e, "Image upload failed, keeping previous value");
                None
            }
        }
    }

    /// Best-effort removal of a hosted image that is no longer referenced.
    pub async fn discard(&self, url: Option<&str>) {
        let Some(public_id) = url.and_then(|u| self.uploader.public_id_from_url(u)) else {
            return;
        };
        if let Err(e) = self.uploader.delete(&public_id).await {
            warn!(public_id = %public_id, error = %e, "Failed to delete hosted image");
        }
    }
}
