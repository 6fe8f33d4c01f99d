//! Image hosting configuration.

use serde::{Deserialize, Serialize};

/// Cloudinary credentials. Uploads are disabled when any credential is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Cloudinary cloud name.
    #[serde(default)]
    pub cloud_name: String,
    /// Cloudinary API key.
    #[serde(default)]
    pub api_key: String,
    /// Cloudinary API secret.
    #[serde(default)]
    pub api_secret: String,
    /// Folder uploaded images are placed in.
    #[serde(default = "default_folder")]
    pub folder: String,
    /// Base URL of the Cloudinary REST API.
    #[serde(default = "default_api_base")]
    pub api_base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

impl MediaConfig {
    /// Whether all credentials needed for uploads are present.
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            folder: default_folder(),
            api_base_url: default_api_base(),
            timeout_seconds: default_timeout(),
        }
    }
}

fn default_folder() -> String {
    "fc_borghetto".to_string()
}

fn default_api_base() -> String {
    "https://api.cloudinary.com/v1_1".to_string()
}

fn default_timeout() -> u64 {
    30
}
