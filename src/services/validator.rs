//! Field validation for user registration and lookup.

use regex::Regex;
use std::sync::Arc;

use crate::config::{
    Config, EMAIL_ALREADY_REGISTERED_MESSAGE, EMAIL_VALIDATION_REGEX, INVALID_EMAIL_MESSAGE,
    INVALID_PASSWORD_MESSAGE, USER_ID_REGEX,
};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Compiled validation patterns, built once and shared read-only.
#[derive(Debug, Clone)]
pub struct ValidationPatterns {
    email: Regex,
    password: Regex,
    user_id: Regex,
}

impl ValidationPatterns {
    /// Compile the email and password patterns. Each must match the whole input.
    ///
    /// # Errors
    /// Returns `AppError::Internal` when a pattern does not compile.
    pub fn new(email: &str, password: &str) -> AppResult<Self> {
        Ok(Self {
            email: compile_full_match(email)?,
            password: compile_full_match(password)?,
            user_id: compile_full_match(USER_ID_REGEX)?,
        })
    }

    /// Fixed email pattern plus the configured password policy
    pub fn from_config(config: &Config) -> AppResult<Self> {
        Self::new(EMAIL_VALIDATION_REGEX, &config.password_regex)
    }

    pub fn is_valid_email(&self, email: &str) -> bool {
        self.email.is_match(email)
    }

    pub fn is_valid_password(&self, password: &str) -> bool {
        self.password.is_match(password)
    }

    pub fn is_valid_user_id(&self, id: &str) -> bool {
        self.user_id.is_match(id)
    }
}

fn compile_full_match(pattern: &str) -> AppResult<Regex> {
    Regex::new(&format!("^(?:{})$", pattern))
        .map_err(|e| AppError::internal(format!("Invalid validation pattern {:?}: {}", pattern, e)))
}

/// Registration field validator.
///
/// Format checks are pure; the duplicate check reads the repository.
pub struct UserValidator {
    patterns: Arc<ValidationPatterns>,
    repo: Arc<dyn UserRepository>,
}

impl UserValidator {
    pub fn new(patterns: Arc<ValidationPatterns>, repo: Arc<dyn UserRepository>) -> Self {
        Self { patterns, repo }
    }

    pub fn patterns(&self) -> &ValidationPatterns {
        &self.patterns
    }

    /// Check format and uniqueness, returning the accepted email.
    pub async fn validate_email<'a>(&self, email: Option<&'a str>) -> AppResult<&'a str> {
        let email = email
            .filter(|e| self.patterns.is_valid_email(e))
            .ok_or_else(|| AppError::field_validation(INVALID_EMAIL_MESSAGE))?;

        if self.repo.find_by_email(email).await?.is_some() {
            return Err(AppError::field_validation(EMAIL_ALREADY_REGISTERED_MESSAGE));
        }

        Ok(email)
    }

    /// Check the password against the configured policy, returning it.
    pub fn validate_password<'a>(&self, password: Option<&'a str>) -> AppResult<&'a str> {
        password
            .filter(|p| self.patterns.is_valid_password(p))
            .ok_or_else(|| AppError::field_validation(INVALID_PASSWORD_MESSAGE))
    }
}
