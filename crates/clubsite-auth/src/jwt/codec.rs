//! HS256 session token issuing and verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use clubsite_core::config::{AuthConfig, MAX_SESSION_TTL_HOURS};
use clubsite_core::error::AppError;
use clubsite_entity::user::User;

use super::claims::Claims;

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signature and payload are fine but `now >= exp`.
    #[error("Session token has expired")]
    Expired,
    /// Bad signature, wrong algorithm, or malformed token.
    #[error("Session token is invalid")]
    Invalid,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Expired => AppError::authentication(err.to_string()).with_code("SESSION_EXPIRED"),
            TokenError::Invalid => AppError::authentication(err.to_string()),
        }
    }
}

/// A freshly signed token with its claims.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Compact JWS string.
    pub token: String,
    /// Claims that were signed.
    pub claims: Claims,
}

impl IssuedToken {
    /// Expiry of the token.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.claims.expires_at()
    }
}

/// Signs and verifies stateless session tokens with the server secret.
#[derive(Clone)]
pub struct SessionCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
}

impl std::fmt::Debug for SessionCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl SessionCodec {
    /// Creates a codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_secret(
            config.session_secret.as_bytes(),
            chrono::Duration::hours(config.session_ttl_hours.min(MAX_SESSION_TTL_HOURS) as i64),
        )
    }

    /// Creates a codec from a raw secret and token lifetime.
    pub fn with_secret(secret: &[u8], ttl: chrono::Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked against the caller's clock in `verify_at`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Token lifetime.
    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// Issue a token for `user` starting now.
    pub fn issue(&self, user: &User) -> Result<IssuedToken, AppError> {
        self.issue_at(user, Utc::now())
    }

    /// Issue a token for `user` as if the current time were `now`.
    pub fn issue_at(&self, user: &User, now: DateTime<Utc>) -> Result<IssuedToken, AppError> {
        self.sign(Claims::for_user(user, now, self.ttl))
    }

    /// Sign arbitrary claims.
    pub fn sign(&self, claims: Claims) -> Result<IssuedToken, AppError> {
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;
        Ok(IssuedToken { token, claims })
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify signature and payload, then check expiry against `now`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| TokenError::Invalid)?;

        if data.claims.is_expired_at(now) {
            return Err(TokenError::Expired);
        }
        Ok(data.claims)
    }
}
