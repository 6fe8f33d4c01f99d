//! Site configuration model.
//!
//! The whole document is stored as one JSON value, so adding a presentation
//! field only needs a new struct field with a serde default.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Branding, home page, contact, and live-stream settings for the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Club name shown in the header.
    pub site_name: String,
    /// Hosted logo URL.
    pub logo: Option<String>,
    /// Theme primary color (hex).
    pub primary_color: String,
    /// Theme secondary color (hex).
    pub secondary_color: String,
    /// Theme accent color (hex).
    pub accent_color: String,
    /// Home page headline.
    pub home_title: String,
    /// Home page introduction.
    pub home_description: String,
    /// Hosted home page hero image URL.
    pub home_image: Option<String>,
    /// Hosted "about" section image URL.
    pub about_image: Option<String>,
    /// Postal address of the club.
    pub address: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Pitch location for the contacts map.
    pub map_coordinates: MapCoordinates,
    /// Facebook page URL.
    pub facebook_url: Option<String>,
    /// Instagram profile URL.
    pub instagram_url: Option<String>,
    /// YouTube channel URL.
    pub youtube_url: Option<String>,
    /// Current live-stream URL.
    pub live_stream_url: Option<String>,
    /// Whether the live page shows the stream.
    pub live_stream_active: bool,
    /// When the document was first written.
    pub created_at: DateTime<Utc>,
    /// When the document was last written.
    pub updated_at: DateTime<Utc>,
}

/// Latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCoordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Default for MapCoordinates {
    fn default() -> Self {
        Self {
            lat: 45.44,
            lng: 10.99,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            site_name: "FC Borghetto".to_string(),
            logo: None,
            primary_color: "#1f2937".to_string(),
            secondary_color: "#ef4444".to_string(),
            accent_color: "#f59e0b".to_string(),
            home_title: "Benvenuti nel sito del FC Borghetto".to_string(),
            home_description:
                "Una squadra di calcio con una grande passione per lo sport e la comunità."
                    .to_string(),
            home_image: None,
            about_image: None,
            address: "Via Roma 123, Borghetto, IT".to_string(),
            email: "info@fcborghetto.it".to_string(),
            phone: "+39 123 456 7890".to_string(),
            map_coordinates: MapCoordinates::default(),
            facebook_url: Some("https://facebook.com".to_string()),
            instagram_url: Some("https://instagram.com".to_string()),
            youtube_url: None,
            live_stream_url: None,
            live_stream_active: false,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update of the site configuration. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfigUpdate {
    /// New club name.
    pub site_name: Option<String>,
    /// New logo (a `data:` URL on input, hosted URL once stored).
    pub logo: Option<String>,
    /// New primary color.
    pub primary_color: Option<String>,
    /// New secondary color.
    pub secondary_color: Option<String>,
    /// New accent color.
    pub accent_color: Option<String>,
    /// New home page headline.
    pub home_title: Option<String>,
    /// New home page introduction.
    pub home_description: Option<String>,
    /// New hero image (a `data:` URL on input, hosted URL once stored).
    pub home_image: Option<String>,
    /// New "about" image (a `data:` URL on input, hosted URL once stored).
    pub about_image: Option<String>,
    /// New postal address.
    pub address: Option<String>,
    /// New contact email.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New pitch location.
    pub map_coordinates: Option<MapCoordinates>,
    /// New Facebook page URL.
    pub facebook_url: Option<String>,
    /// New Instagram profile URL.
    pub instagram_url: Option<String>,
    /// New YouTube channel URL.
    pub youtube_url: Option<String>,
    /// New live-stream URL.
    pub live_stream_url: Option<String>,
    /// Show or hide the live stream.
    pub live_stream_active: Option<bool>,
}

impl SiteConfigUpdate {
    /// Merge the present fields into `config` and bump `updated_at`.
    pub fn apply_to(self, config: &mut SiteConfig) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *target = v;
            }
        }
        fn set_opt<T>(target: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *target = value;
            }
        }

        set(&mut config.site_name, self.site_name);
        set_opt(&mut config.logo, self.logo);
        set(&mut config.primary_color, self.primary_color);
        set(&mut config.secondary_color, self.secondary_color);
        set(&mut config.accent_color, self.accent_color);
        set(&mut config.home_title, self.home_title);
        set(&mut config.home_description, self.home_description);
        set_opt(&mut config.home_image, self.home_image);
        set_opt(&mut config.about_image, self.about_image);
        set(&mut config.address, self.address);
        set(&mut config.email, self.email);
        set(&mut config.phone, self.phone);
        set(&mut config.map_coordinates, self.map_coordinates);
        set_opt(&mut config.facebook_url, self.facebook_url);
        set_opt(&mut config.instagram_url, self.instagram_url);
        set_opt(&mut config.youtube_url, self.youtube_url);
        set_opt(&mut config.live_stream_url, self.live_stream_url);
        set(&mut config.live_stream_active, self.live_stream_active);
        config.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut config = SiteConfig::default();
        let update = SiteConfigUpdate {
            live_stream_url: Some("https://youtube.com/live/abc".to_string()),
            live_stream_active: Some(true),
            ..Default::default()
        };
        update.apply_to(&mut config);

        assert_eq!(config.site_name, "FC Borghetto");
        assert_eq!(
            config.live_stream_url.as_deref(),
            Some("https://youtube.com/live/abc")
        );
        assert!(config.live_stream_active);
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let config: SiteConfig =
            serde_json::from_value(serde_json::json!({ "site_name": "Other FC" })).unwrap();
        assert_eq!(config.site_name, "Other FC");
        assert_eq!(config.primary_color, "#1f2937");
    }
}
