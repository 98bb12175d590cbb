//! User repository: users and their phones, persisted together.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use super::entities::{
    phone::{self, Entity as PhoneEntity},
    user::{self, Entity as UserEntity},
    user_from_models,
};
use crate::config::EMAIL_ALREADY_REGISTERED_MESSAGE;
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID, phones included
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by email address, phones included
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a new user with its phones and return the stored form.
    ///
    /// Assigns the identifier. A duplicate email rejected by the storage
    /// unique constraint surfaces as a field validation error.
    async fn save(&self, user: NewUser) -> AppResult<User>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn with_phones<C: ConnectionTrait>(conn: &C, model: user::Model) -> AppResult<User> {
        let phones = model
            .find_related(PhoneEntity)
            .order_by_asc(phone::Column::Id)
            .all(conn)
            .await?;
        Ok(user_from_models(model, phones))
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        match UserEntity::find_by_id(id).one(&self.db).await? {
            Some(model) => Ok(Some(Self::with_phones(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;

        match result {
            Some(model) => Ok(Some(Self::with_phones(&self.db, model).await?)),
            None => Ok(None),
        }
    }

    async fn save(&self, user: NewUser) -> AppResult<User> {
        // Dropping the transaction without commit rolls it back
        let txn = self.db.begin().await?;

        let user_model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at),
            last_login: Set(user.last_login),
            is_active: Set(user.is_active),
            token: Set(user.token),
        }
        .insert(&txn)
        .await
        .map_err(map_insert_error)?;

        let mut phones = Vec::with_capacity(user.phones.len());
        for new_phone in user.phones {
            let model = phone::ActiveModel {
                id: NotSet,
                user_id: Set(user_model.id),
                number: Set(new_phone.number),
                city_code: Set(new_phone.city_code),
                country_code: Set(new_phone.country_code),
            }
            .insert(&txn)
            .await?;
            phones.push(model);
        }

        txn.commit().await?;
        tracing::debug!(user_id = %user_model.id, phones = phones.len(), "user persisted");

        Ok(user_from_models(user_model, phones))
    }
}

/// The unique constraint on `users.email` is the source of truth for
/// duplicates that slip past the pre-insert lookup.
fn map_insert_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::field_validation(EMAIL_ALREADY_REGISTERED_MESSAGE)
        }
        _ => AppError::from(err),
    }
}
