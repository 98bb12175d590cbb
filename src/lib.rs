//! Users Manager - user registration service
//!
//! Validates an email/password pair, hashes the password, issues an
//! identity token and persists the user with its phones. Users can be
//! looked up by id.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Users, phones and their request/response shapes
//! - **services**: Validation, assembly and the user use cases
//! - **infra**: Database connection and repositories
//! - **api**: HTTP handlers, extractors and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Password, Phone, User};
pub use errors::{AppError, AppResult};
