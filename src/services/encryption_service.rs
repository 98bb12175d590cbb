//! Encryption service - Password hashing and identity token issuance.
//!
//! Password hashing is delegated to the domain `Password` value object,
//! tokens are HS256 JWTs signed with the configured secret.

use chrono::Duration;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::domain::{NewUser, Password};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Claims carried by the registration token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Registered email
    pub sub: String,
    pub name: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// Encryption service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EncryptionService: Send + Sync {
    /// Hash a plain password, never returning the input unchanged
    fn hash_password(&self, plain_text: &str) -> AppResult<String>;

    /// Mint an identity token for a fully assembled user
    fn issue_token(&self, user: &NewUser) -> AppResult<String>;
}

/// Argon2 + JWT implementation of EncryptionService
pub struct Encryptor {
    encoding_key: EncodingKey,
    expiration_hours: i64,
}

impl Encryptor {
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            expiration_hours,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes(), config.jwt_expiration_hours)
    }
}

impl EncryptionService for Encryptor {
    fn hash_password(&self, plain_text: &str) -> AppResult<String> {
        Ok(Password::hash(plain_text)?.into_string())
    }

    fn issue_token(&self, user: &NewUser) -> AppResult<String> {
        let issued_at = user.created_at;
        let expires_at = Duration::try_hours(self.expiration_hours)
            .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Token expiration of {} hours is out of range",
                    self.expiration_hours
                ))
            })?;

        let claims = TokenClaims {
            sub: user.email.clone(),
            name: user.name.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }
}
