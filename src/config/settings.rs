//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_PASSWORD_VALIDATION_REGEX,
    MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Only used by debug builds when `JWT_SECRET` is absent
const DEV_JWT_SECRET: &str = "users-manager-development-secret-32";

/// Runtime configuration, read once at startup.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    /// Password policy pattern, matched against the whole password
    pub password_regex: String,
}

// Connection strings embed credentials
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Config {{ database_url: [REDACTED], jwt_secret: [REDACTED], \
             jwt_expiration_hours: {}, password_regex: {:?} }}",
            self.jwt_expiration_hours, self.password_regex
        )
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parsed_var_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Unparseable setting, using default");
            default
        }),
        Err(_) => default,
    }
}

/// Token lifetimes must be positive and small enough for timestamp arithmetic.
fn check_expiration_hours(hours: i64) -> AppResult<i64> {
    if (1..=MAX_JWT_EXPIRATION_HOURS).contains(&hours) {
        Ok(hours)
    } else {
        Err(AppError::internal(format!(
            "JWT_EXPIRATION_HOURS must be between 1 and {}, got {}",
            MAX_JWT_EXPIRATION_HOURS, hours
        )))
    }
}

impl Config {
    /// Read settings from the process environment, after loading `.env`.
    ///
    /// # Errors
    /// `JWT_SECRET` is mandatory outside debug builds and must be long enough.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET missing, falling back to a development secret");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => return Err(AppError::internal("JWT_SECRET must be set")),
        };

        Self {
            database_url: var_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            jwt_secret,
            jwt_expiration_hours: parsed_var_or(
                "JWT_EXPIRATION_HOURS",
                DEFAULT_JWT_EXPIRATION_HOURS,
            ),
            password_regex: var_or("PASSWORD_REGEX", DEFAULT_PASSWORD_VALIDATION_REGEX),
        }
        .validated()
    }

    /// Build a configuration from explicit values (embedding, tests).
    pub fn new(
        database_url: impl Into<String>,
        jwt_secret: impl Into<String>,
        password_regex: impl Into<String>,
    ) -> AppResult<Self> {
        Self {
            database_url: database_url.into(),
            jwt_secret: jwt_secret.into(),
            jwt_expiration_hours: DEFAULT_JWT_EXPIRATION_HOURS,
            password_regex: password_regex.into(),
        }
        .validated()
    }

    fn validated(self) -> AppResult<Self> {
        if self.jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT_SECRET is shorter than {} bytes",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        check_expiration_hours(self.jwt_expiration_hours)?;
        Ok(self)
    }

    /// HMAC key for signing identity tokens
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}
