//! Password policy for new administrator accounts.

use clubsite_core::config::AuthConfig;

/// Enforces the configured minimum password length.
#[derive(Debug, Clone, Copy)]
pub struct PasswordValidator {
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_min_length(config.password_min_length)
    }

    /// Creates a validator with an explicit minimum.
    pub fn with_min_length(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Minimum number of characters.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Whether `password` has at least the minimum number of characters.
    pub fn is_long_enough(&self, password: &str) -> bool {
        password.chars().count() >= self.min_length
    }
}
