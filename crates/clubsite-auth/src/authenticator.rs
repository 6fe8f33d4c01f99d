//! Username/password login.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use clubsite_core::error::AppError;
use clubsite_database::CredentialStore;
use clubsite_entity::user::User;

use crate::jwt::{IssuedToken, SessionCodec};
use crate::password::PasswordHasher;

/// Login failure.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user, wrong password, or empty input. Deliberately
    /// indistinguishable.
    #[error("Invalid username or password")]
    InvalidCredentials,
    /// Store or hashing failure.
    #[error("Authentication failed: {0}")]
    Internal(#[source] AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                AppError::authentication(err.to_string()).with_code("INVALID_CREDENTIALS")
            }
            AuthError::Internal(inner) => inner,
        }
    }
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    /// The authenticated user.
    pub user: User,
    /// The signed session token.
    pub token: IssuedToken,
}

/// Verifies credentials against the store and issues session tokens.
#[derive(Clone)]
pub struct Authenticator {
    users: Arc<dyn CredentialStore>,
    codec: SessionCodec,
    hasher: PasswordHasher,
    /// Verified against when the username is unknown so both failure paths
    /// cost one Argon2 verification.
    dummy_hash: Arc<str>,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("codec", &self.codec)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    /// Creates an authenticator. Hashes the timing-equalization password once.
    pub fn new(
        users: Arc<dyn CredentialStore>,
        codec: SessionCodec,
        hasher: PasswordHasher,
    ) -> Result<Self, AppError> {
        let dummy_hash = hasher.hash_password("clubsite-timing-equalizer")?;
        Ok(Self {
            users,
            codec,
            hasher,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    /// The codec used to sign tokens.
    pub fn codec(&self) -> &SessionCodec {
        &self.codec
    }

    /// Check `username`/`password` and issue a session token on success.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthenticatedSession, AuthError> {
        if username.is_empty() || password.is_empty() {
            warn!("Login rejected: missing credentials");
            return Err(AuthError::InvalidCredentials);
        }

        let user = self
            .users
            .find_by_username(username)
            .await
            .map_err(AuthError::Internal)?;

        let hash: Arc<str> = match &user {
            Some(u) => Arc::from(u.password_hash.as_str()),
            None => Arc::clone(&self.dummy_hash),
        };
        let matches = self.verify_blocking(password, hash).await?;

        let user = match user {
            Some(user) if matches => user,
            _ => {
                warn!("Login rejected: invalid credentials");
                return Err(AuthError::InvalidCredentials);
            }
        };

        let token = self.codec.issue(&user).map_err(AuthError::Internal)?;
        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(AuthenticatedSession { user, token })
    }

    async fn verify_blocking(&self, password: &str, hash: Arc<str>) -> Result<bool, AuthError> {
        let hasher = self.hasher.clone();
        let password = password.to_string();
        tokio::task::spawn_blocking(move || hasher.verify_password(&password, &hash))
            .await
            .map_err(|e| AuthError::Internal(AppError::internal(format!("Hashing task failed: {e}"))))?
            .map_err(AuthError::Internal)
    }
}
