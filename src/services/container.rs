//! Service Container - Centralized service access.
//!
//! Wires repositories, encryption and validation into the user service
//! once at startup; everything handed out afterwards is shared via Arc.

use std::sync::Arc;

use super::{
    Encryptor, UserAssembler, UserManager, UserService, UserValidator, ValidationPatterns,
};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{UserRepository, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create service container from database connection and config.
    ///
    /// # Errors
    /// Fails when a configured validation pattern does not compile.
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> AppResult<Self> {
        let repo: Arc<dyn UserRepository> = Arc::new(UserStore::new(db));
        let patterns = Arc::new(ValidationPatterns::from_config(config)?);

        let validator = UserValidator::new(patterns, repo.clone());
        let assembler = UserAssembler::new(Arc::new(Encryptor::from_config(config)));
        let user_service = Arc::new(UserManager::new(validator, assembler, repo));

        Ok(Self { user_service })
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}
