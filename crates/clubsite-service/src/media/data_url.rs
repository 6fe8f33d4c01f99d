//! Parsing of base64 `data:` image URLs sent by the admin forms.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use clubsite_core::error::AppError;

/// Whether `value` is a `data:` URL rather than an already hosted URL.
pub fn is_data_url(value: &str) -> bool {
    value.starts_with("data:")
}

/// A validated base64 image `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl<'a> {
    /// MIME type, e.g. `image/png`.
    pub mime: &'a str,
    /// Decoded payload length in bytes.
    pub size: usize,
}

impl<'a> DataUrl<'a> {
    /// Parse `data:image/<type>;base64,<payload>`.
    pub fn parse(value: &'a str) -> Result<Self, AppError> {
        let rest = value
            .strip_prefix("data:")
            .ok_or_else(|| AppError::validation("Image must be a data URL"))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| AppError::validation("Malformed image data URL"))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| AppError::validation("Image data URL must be base64 encoded"))?;

        if !mime.starts_with("image/") {
            return Err(AppError::validation(format!(
                "Unsupported image type '{mime}'"
            )));
        }

        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| AppError::validation(format!("Invalid base64 image payload: {e}")))?;
        if bytes.is_empty() {
            return Err(AppError::validation("Image payload is empty"));
        }

        Ok(Self {
            mime,
            size: bytes.len(),
        })
    }
}
