//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{ServiceContainer, Services, UserService};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Build the service graph on top of an open database.
    ///
    /// # Errors
    /// Fails when the configured password pattern does not compile.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let container = Services::from_connection(database.get_connection(), config)?;

        Ok(Self {
            user_service: container.users(),
            database,
        })
    }

    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
