//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::phone::{NewPhone, Phone, PhoneRequest, PhoneResponse};

/// Persisted user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    /// Argon2 PHC string, never the plain password
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub is_active: bool,
    pub token: String,
    pub phones: Vec<Phone>,
}

/// User assembled at registration time, not yet persisted.
///
/// The repository assigns the identifier when saving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub is_active: bool,
    pub token: String,
    pub phones: Vec<NewPhone>,
}

/// User registration request
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// User email address
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// Plain password, checked against the configured policy
    #[schema(example = "Hunter2024!")]
    pub password: Option<String>,
    #[validate(nested)]
    pub phones: Option<Vec<PhoneRequest>>,
}

/// Response returned after a successful registration
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    /// Identity token issued at registration
    pub token: String,
    pub is_active: bool,
    pub phones: Vec<PhoneResponse>,
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub created: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
    pub token: String,
    pub is_active: bool,
    pub phones: Vec<PhoneResponse>,
}

impl From<User> for CreateUserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            created: user.created_at,
            last_login: user.last_login,
            token: user.token,
            is_active: user.is_active,
            phones: user.phones.into_iter().map(PhoneResponse::from).collect(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created: user.created_at,
            last_login: user.last_login,
            token: user.token,
            is_active: user.is_active,
            phones: user.phones.into_iter().map(PhoneResponse::from).collect(),
        }
    }
}
