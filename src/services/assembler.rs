//! Builds new users from validated registration input.

use chrono::Utc;
use std::sync::Arc;

use super::EncryptionService;
use crate::domain::{NewPhone, NewUser, PhoneRequest};
use crate::errors::AppResult;

/// Registration fields that already passed validation
#[derive(Debug, Clone, Copy)]
pub struct Registration<'a> {
    pub name: Option<&'a str>,
    pub email: &'a str,
    pub password: &'a str,
    pub phones: &'a [PhoneRequest],
}

pub struct UserAssembler {
    encryption: Arc<dyn EncryptionService>,
}

impl UserAssembler {
    pub fn new(encryption: Arc<dyn EncryptionService>) -> Self {
        Self { encryption }
    }

    /// Assemble an active user with a hashed password and its phones.
    ///
    /// The token is issued from the assembled user, so it comes last.
    pub fn build_user(&self, registration: Registration<'_>) -> AppResult<NewUser> {
        let now = Utc::now();

        let mut user = NewUser {
            name: registration.name.map(str::to_string),
            email: registration.email.to_string(),
            password_hash: self.encryption.hash_password(registration.password)?,
            created_at: now,
            last_login: now,
            is_active: true,
            token: String::new(),
            phones: registration.phones.iter().map(NewPhone::from).collect(),
        };

        user.token = self.encryption.issue_token(&user)?;
        Ok(user)
    }
}
