//! Cloudinary upload API client.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use sha2::{Digest, Sha256};
use tracing::{debug, error, info};

use clubsite_core::config::MediaConfig;
use clubsite_core::error::{AppError, ErrorKind};
use clubsite_core::result::AppResult;
use clubsite_core::traits::media::{ImageUploader, UploadedImage};

use super::data_url::DataUrl;

/// Uploads images through Cloudinary's signed REST API.
#[derive(Debug, Clone)]
pub struct CloudinaryUploader {
    client: reqwest::Client,
    config: MediaConfig,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

impl CloudinaryUploader {
    /// Creates an uploader from media configuration.
    pub fn new(config: &MediaConfig) -> AppResult<Self> {
        if !config.is_configured() {
            return Err(AppError::configuration(
                "Cloudinary requires media.cloud_name, media.api_key and media.api_secret",
            ));
        }
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint(&self, action: &str) -> String {
        format!(
            "{}/{}/image/{action}",
            self.config.api_base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }

    async fn post<T: DeserializeOwned>(
        &self,
        action: &str,
        body: &serde_json::Value,
    ) -> AppResult<T> {
        let response = self
            .client
            .post(self.endpoint(action))
            .json(body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("Cloudinary {action} request failed"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%status, body = %body, action, "Cloudinary request rejected");
            return Err(AppError::external_service(format!(
                "Cloudinary {action} failed: HTTP {status}"
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Unexpected Cloudinary {action} response"),
                e,
            )
        })
    }
}

/// Signature over the request parameters as Cloudinary computes it:
/// parameters sorted by name, joined as `k=v&k=v`, the secret appended, then
/// SHA-256 in lowercase hex.
pub(crate) fn sign(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_by(|a, b| a.0.cmp(b.0));
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl ImageUploader for CloudinaryUploader {
    fn provider_name(&self) -> &str {
        "cloudinary"
    }

    async fn upload(&self, data_url: &str) -> AppResult<UploadedImage> {
        let parsed = DataUrl::parse(data_url)?;
        debug!(mime = parsed.mime, size = parsed.size, "Uploading image to Cloudinary");

        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[
                ("folder", self.config.folder.as_str()),
                ("timestamp", timestamp.as_str()),
            ],
            &self.config.api_secret,
        );
        let body = serde_json::json!({
            "file": data_url,
            "api_key": self.config.api_key,
            "folder": self.config.folder,
            "timestamp": timestamp,
            "signature": signature,
            "signature_algorithm": "sha256",
        });

        let uploaded: UploadResponse = self.post("upload", &body).await?;
        info!(public_id = %uploaded.public_id, "Image uploaded");
        Ok(UploadedImage {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> AppResult<()> {
        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(
            &[("public_id", public_id), ("timestamp", timestamp.as_str())],
            &self.config.api_secret,
        );
        let body = serde_json::json!({
            "public_id": public_id,
            "api_key": self.config.api_key,
            "timestamp": timestamp,
            "signature": signature,
            "signature_algorithm": "sha256",
        });

        let destroyed: DestroyResponse = self.post("destroy", &body).await?;
        info!(public_id, result = %destroyed.result, "Image deleted");
        Ok(())
    }

    /// `https://res.cloudinary.com/<cloud>/image/upload/v123/<folder>/<id>.<ext>`
    /// yields `<folder>/<id>`.
    fn public_id_from_url(&self, url: &str) -> Option<String> {
        let marker = format!("/{}/image/upload/", self.config.cloud_name);
        let (_, rest) = url.split_once(&marker)?;
        let rest = match rest.split_once('/') {
            Some((version, tail)) if is_version_segment(version) => tail,
            _ => rest,
        };
        let id = rest.rsplit_once('.').map_or(rest, |(id, _)| id);
        (!id.is_empty()).then(|| id.to_string())
    }
}

fn is_version_segment(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
}
