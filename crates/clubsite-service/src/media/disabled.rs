//! Uploader used when no image host is configured.

use async_trait::async_trait;

use clubsite_core::error::AppError;
use clubsite_core::result::AppResult;
use clubsite_core::traits::media::{ImageUploader, UploadedImage};

/// Rejects every upload with a configuration error. Already hosted URLs
/// still pass through the content services untouched.
#[derive(Debug, Clone, Default)]
pub struct DisabledUploader;

#[async_trait]
impl ImageUploader for DisabledUploader {
    fn provider_name(&self) -> &str {
        "disabled"
    }

    async fn upload(&self, _data_url: &str) -> AppResult<UploadedImage> {
        Err(AppError::configuration(
            "Image uploads are not configured (media.cloud_name, media.api_key, media.api_secret)",
        ))
    }

    async fn delete(&self, _public_id: &str) -> AppResult<()> {
        Err(AppError::configuration("Image uploads are not configured"))
    }
}
