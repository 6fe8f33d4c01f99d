//! Image hosting trait for pluggable upload backends.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::AppResult;

/// An image stored by the hosting provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedImage {
    /// Public HTTPS URL of the stored image.
    pub url: String,
    /// Provider identifier used for later deletion.
    pub public_id: String,
}

/// Trait for image hosting backends.
///
/// Content services hand over images received as `data:` URLs and store the
/// returned public URL instead. The [`ImageUploader`] trait is defined here
/// in `clubsite-core` and implemented in `clubsite-service`.
#[async_trait]
pub trait ImageUploader: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider name (e.g., "cloudinary").
    fn provider_name(&self) -> &str;

    /// Upload an image given as a `data:` URL.
    async fn upload(&self, data_url: &str) -> AppResult<UploadedImage>;

    /// Delete a previously uploaded image.
    async fn delete(&self, public_id: &str) -> AppResult<()>;

    /// Recover the provider identifier from a hosted URL, when the URL was
    /// produced by this provider.
    fn public_id_from_url(&self, _url: &str) -> Option<String> {
        None
    }
}
