//! Domain layer - Core business entities and logic
//!
//! This module contains the user and phone models, the request/response
//! shapes exchanged with callers and the conversions between them.

pub mod password;
pub mod phone;
pub mod user;

pub use password::Password;
pub use phone::{NewPhone, Phone, PhoneRequest, PhoneResponse};
pub use user::{CreateUserRequest, CreateUserResponse, NewUser, User, UserResponse};
