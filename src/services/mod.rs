//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod assembler;
pub mod container;
mod encryption_service;
mod user_service;
mod validator;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use assembler::{Registration, UserAssembler};
pub use encryption_service::{EncryptionService, Encryptor, TokenClaims};
pub use user_service::{UserManager, UserService};
pub use validator::{UserValidator, ValidationPatterns};

#[cfg(any(test, feature = "test-utils"))]
pub use encryption_service::MockEncryptionService;
