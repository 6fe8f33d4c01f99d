//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod media;
pub mod setup;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, MAX_SESSION_TTL_HOURS, PASSWORD_MIN_LENGTH_FLOOR};
pub use self::database::{DatabaseConfig, DatabaseProvider};
pub use self::logging::LoggingConfig;
pub use self::media::MediaConfig;
pub use self::setup::SetupConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Session and password settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// First-run admin bootstrap settings.
    #[serde(default)]
    pub setup: SetupConfig,
    /// Image hosting settings.
    #[serde(default)]
    pub media: MediaConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `CLUBSITE_`, then validates
    /// the secrets the server cannot start without.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("CLUBSITE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations missing a required secret.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.auth.session_secret.trim().is_empty() {
            return Err(AppError::configuration(
                "auth.session_secret must be set (CLUBSITE__AUTH__SESSION_SECRET)",
            ));
        }
        if self.setup.setup_key.trim().is_empty() {
            return Err(AppError::configuration(
                "setup.setup_key must be set (CLUBSITE__SETUP__SETUP_KEY)",
            ));
        }
        if !(1..=MAX_SESSION_TTL_HOURS).contains(&self.auth.session_ttl_hours) {
            return Err(AppError::configuration(format!(
                "auth.session_ttl_hours must be between 1 and {MAX_SESSION_TTL_HOURS}"
            )));
        }
        if self.auth.password_min_length < PASSWORD_MIN_LENGTH_FLOOR {
            return Err(AppError::configuration(format!(
                "auth.password_min_length must be at least {PASSWORD_MIN_LENGTH_FLOOR}"
            )));
        }
        if self.database.provider == DatabaseProvider::Postgres && self.database.url.is_empty() {
            return Err(AppError::configuration(
                "database.url is required for the postgres provider",
            ));
        }
        Ok(())
    }
}
