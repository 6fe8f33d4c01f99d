//! One-time bootstrap of the first administrator.
//!
//! Gated by the shared setup key from configuration and independent of the
//! session system: it never reads or issues session tokens.

use std::sync::Arc;

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};

use clubsite_core::config::AppConfig;
use clubsite_core::error::{AppError, ErrorKind};
use clubsite_database::CredentialStore;
use clubsite_entity::user::{NewUser, User, UserRole};

use crate::password::{PasswordHasher, PasswordValidator};

/// Admin bootstrap failure.
#[derive(Debug, Error)]
pub enum SetupError {
    /// The supplied setup key does not match.
    #[error("Invalid setup key")]
    Unauthorized,
    /// An administrator already exists.
    #[error("An administrator already exists")]
    AlreadyInitialized,
    /// Username or password was empty.
    #[error("Username and password are required")]
    MissingFields,
    /// Password shorter than the configured minimum.
    #[error("Password must be at least {min_length} characters long")]
    WeakPassword {
        /// Required number of characters.
        min_length: usize,
    },
    /// Store or hashing failure.
    #[error("Setup failed: {0}")]
    Internal(#[source] AppError),
}

impl SetupError {
    /// Stable code reported to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::MissingFields => "MISSING_FIELDS",
            Self::WeakPassword { .. } => "WEAK_PASSWORD",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<SetupError> for AppError {
    fn from(err: SetupError) -> Self {
        let code = err.code();
        match err {
            SetupError::Unauthorized => AppError::authentication(err.to_string()).with_code(code),
            SetupError::AlreadyInitialized => AppError::conflict(err.to_string()).with_code(code),
            SetupError::MissingFields | SetupError::WeakPassword { .. } => {
                AppError::validation(err.to_string()).with_code(code)
            }
            SetupError::Internal(inner) => inner,
        }
    }
}

/// Creates the first administrator behind the setup key.
#[derive(Clone)]
pub struct SetupGate {
    setup_key_digest: [u8; 32],
    users: Arc<dyn CredentialStore>,
    hasher: PasswordHasher,
    validator: PasswordValidator,
}

impl std::fmt::Debug for SetupGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupGate")
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}

impl SetupGate {
    /// Creates a gate from application configuration.
    pub fn new(config: &AppConfig, users: Arc<dyn CredentialStore>, hasher: PasswordHasher) -> Self {
        Self::with_key(
            &config.setup.setup_key,
            users,
            hasher,
            PasswordValidator::new(&config.auth),
        )
    }

    /// Creates a gate with an explicit setup key.
    pub fn with_key(
        setup_key: &str,
        users: Arc<dyn CredentialStore>,
        hasher: PasswordHasher,
        validator: PasswordValidator,
    ) -> Self {
        Self {
            setup_key_digest: digest(setup_key),
            users,
            hasher,
            validator,
        }
    }

    /// Whether `candidate` equals the configured setup key.
    ///
    /// Compares SHA-256 digests in constant time so neither the content nor
    /// the length of the key leaks through timing. Does not check whether an
    /// administrator already exists.
    pub fn verify_setup_key(&self, candidate: &str) -> bool {
        constant_time_eq(&digest(candidate), &self.setup_key_digest)
    }

    /// Whether an administrator account already exists.
    pub async fn is_initialized(&self) -> Result<bool, AppError> {
        self.users.admin_exists().await
    }

    /// Create the first administrator.
    ///
    /// Checks run in a fixed order: key, existing admin, empty fields,
    /// password length.
    pub async fn bootstrap_admin(
        &self,
        username: &str,
        password: &str,
        candidate_key: &str,
    ) -> Result<User, SetupError> {
        if !self.verify_setup_key(candidate_key) {
            warn!("Admin bootstrap rejected: invalid setup key");
            return Err(SetupError::Unauthorized);
        }

        if self.users.admin_exists().await.map_err(SetupError::Internal)? {
            return Err(SetupError::AlreadyInitialized);
        }

        if username.is_empty() || password.is_empty() {
            return Err(SetupError::MissingFields);
        }

        if !self.validator.is_long_enough(password) {
            return Err(SetupError::WeakPassword {
                min_length: self.validator.min_length(),
            });
        }

        let hasher = self.hasher.clone();
        let plain = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash_password(&plain))
            .await
            .map_err(|e| {
                SetupError::Internal(AppError::internal(format!("Hashing task failed: {e}")))
            })?
            .map_err(SetupError::Internal)?;

        let created = self
            .users
            .create_first_admin(NewUser {
                username: username.to_string(),
                password_hash,
                role: UserRole::Admin,
            })
            .await
            .map_err(|e| {
                if e.is(ErrorKind::Conflict) {
                    SetupError::AlreadyInitialized
                } else {
                    SetupError::Internal(e)
                }
            })?;

        match created {
            Some(user) => {
                info!(user_id = %user.id, username = %user.username, "Administrator created");
                Ok(user)
            }
            None => Err(SetupError::AlreadyInitialized),
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use clubsite_database::memory::MemoryUserStore;

    use super::*;

    fn gate() -> (SetupGate, Arc<MemoryUserStore>) {
        let store = Arc::new(MemoryUserStore::new());
        let gate = SetupGate::with_key(
            "sk_test",
            store.clone(),
            PasswordHasher::new(),
            PasswordValidator::with_min_length(8),
        );
        (gate, store)
    }

    #[test]
    fn test_verify_setup_key_is_exact() {
        let (gate, _) = gate();
        assert!(gate.verify_setup_key("sk_test"));
        assert!(!gate.verify_setup_key("wrong"));
        assert!(!gate.verify_setup_key("sk_test "));
        assert!(!gate.verify_setup_key("SK_TEST"));
        assert!(!gate.verify_setup_key(""));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"short", b"longer"));
    }

    #[tokio::test]
    async fn test_bootstrap_then_second_attempt_fails() {
        let (gate, store) = gate();

        let user = gate
            .bootstrap_admin("admin", "password123", "sk_test")
            .await
            .unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, UserRole::Admin);
        assert!(gate.is_initialized().await.unwrap());

        let err = gate
            .bootstrap_admin("admin2", "password456", "sk_test")
            .await
            .unwrap_err();
        assert!(matches!(err, SetupError::AlreadyInitialized));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_check_order() {
        let (gate, _) = gate();

        // Bad key wins over every other problem.
        let err = gate.bootstrap_admin("", "", "wrong").await.unwrap_err();
        assert!(matches!(err, SetupError::Unauthorized));

        let err = gate.bootstrap_admin("", "password123", "sk_test").await.unwrap_err();
        assert!(matches!(err, SetupError::MissingFields));

        let err = gate.bootstrap_admin("admin", "short", "sk_test").await.unwrap_err();
        assert!(matches!(err, SetupError::WeakPassword { min_length: 8 }));
        assert_eq!(err.code(), "WEAK_PASSWORD");

        gate.bootstrap_admin("admin", "password123", "sk_test")
            .await
            .unwrap();
        let err = gate.bootstrap_admin("", "", "sk_test").await.unwrap_err();
        assert!(matches!(err, SetupError::AlreadyInitialized));
    }

    #[tokio::test]
    async fn test_stored_password_is_hashed() {
        let (gate, store) = gate();
        gate.bootstrap_admin("admin", "password123", "sk_test")
            .await
            .unwrap();

        let stored = store.find_by_username("admin").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "password123");
        assert!(
            PasswordHasher::new()
                .verify_password("password123", &stored.password_hash)
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_error_codes_map_to_app_errors() {
        let err: AppError = SetupError::AlreadyInitialized.into();
        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(err.code(), "ALREADY_INITIALIZED");

        let err: AppError = SetupError::Unauthorized.into();
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.code(), "UNAUTHORIZED");
    }
}
