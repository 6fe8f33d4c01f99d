//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Lowest accepted `password_min_length`.
pub const PASSWORD_MIN_LENGTH_FLOOR: usize = 8;
/// Longest accepted session lifetime (one year).
pub const MAX_SESSION_TTL_HOURS: u64 = 24 * 365;

/// Session token and password policy configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for session token signing (HMAC-SHA256). Required.
    #[serde(default)]
    pub session_secret: String,
    /// Session lifetime in hours.
    #[serde(default = "default_session_ttl")]
    pub session_ttl_hours: u64,
    /// Minimum password length for new accounts. Never below 8.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: String::new(),
            session_ttl_hours: default_session_ttl(),
            password_min_length: default_password_min(),
        }
    }
}

fn default_session_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    8
}
