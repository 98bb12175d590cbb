//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and schema bootstrap
//! - Repositories backed by SeaORM

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
