//! Shared helpers for integration tests.
//!
//! Wires the real validator, assembler and encryptor on top of an
//! in-memory repository, so no database is needed.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use users_manager::api::{create_router, AppState};
use users_manager::config::{DEFAULT_PASSWORD_VALIDATION_REGEX, EMAIL_VALIDATION_REGEX};
use users_manager::domain::{NewUser, Phone, User};
use users_manager::errors::{AppError, AppResult};
use users_manager::infra::{Database, UserRepository};
use users_manager::services::{
    Encryptor, UserAssembler, UserManager, UserService, UserValidator, ValidationPatterns,
};

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

/// Repository keeping users in memory, with the same email uniqueness
/// guarantee as the database constraint.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    next_phone_id: AtomicI64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn stored(&self, email: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self.stored(email))
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::field_validation("Email already registered"));
        }

        let id = Uuid::new_v4();
        let stored = User {
            id,
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            created_at: user.created_at,
            last_login: user.last_login,
            is_active: user.is_active,
            token: user.token,
            phones: user
                .phones
                .into_iter()
                .map(|phone| Phone {
                    id: self.next_phone_id.fetch_add(1, Ordering::SeqCst) + 1,
                    user_id: id,
                    number: phone.number,
                    city_code: phone.city_code,
                    country_code: phone.country_code,
                })
                .collect(),
        };

        users.push(stored.clone());
        Ok(stored)
    }
}

/// User service over the given repository with the default policies
pub fn user_service(repo: Arc<InMemoryUserRepository>) -> Arc<dyn UserService> {
    let repo: Arc<dyn UserRepository> = repo;
    let patterns = Arc::new(
        ValidationPatterns::new(EMAIL_VALIDATION_REGEX, DEFAULT_PASSWORD_VALIDATION_REGEX)
            .expect("default patterns compile"),
    );

    Arc::new(UserManager::new(
        UserValidator::new(patterns, repo.clone()),
        UserAssembler::new(Arc::new(Encryptor::new(TEST_SECRET, 24))),
        repo,
    ))
}

/// Router with a disconnected database; only `/health` touches it
pub fn router(repo: Arc<InMemoryUserRepository>) -> axum::Router {
    let database = Arc::new(Database::from_connection(DatabaseConnection::Disconnected));
    create_router(AppState::new(user_service(repo), database))
}
