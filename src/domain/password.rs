//! Argon2 password hashing.
//!
//! Policy checks (the configured password pattern) happen in the validator;
//! this type only turns an accepted password into a PHC hash string.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::errors::{AppError, AppResult};

/// Stored form of a password. Never holds the plain text.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Hash with a fresh random salt and default Argon2id parameters.
    pub fn hash(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(plain_text.as_bytes(), &salt)
            .map(|phc| Self(phc.to_string()))
            .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))
    }

    /// Wrap a PHC string read back from storage.
    pub fn from_hash(phc: String) -> Self {
        Self(phc)
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// False for a wrong password and for a stored value that is not a PHC string.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.0) else {
            return false;
        };
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}
