//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod phone;
pub mod user;

use crate::domain::{Phone, User};

pub use phone::{Entity as PhoneEntity, Model as PhoneModel};
pub use user::{Entity as UserEntity, Model as UserModel};

/// Assemble a domain user from its row and its phone rows.
pub(crate) fn user_from_models(model: UserModel, phones: Vec<PhoneModel>) -> User {
    User {
        id: model.id,
        name: model.name,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
        last_login: model.last_login,
        is_active: model.is_active,
        token: model.token,
        phones: phones.into_iter().map(Phone::from).collect(),
    }
}
