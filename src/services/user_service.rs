//! User service - Registration and lookup use cases.
//!
//! Orchestrates validation, assembly and persistence. Validation failures
//! abort before anything is hashed, issued or written.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::{Registration, UserAssembler, UserValidator};
use crate::config::USER_ID_REQUIRED_MESSAGE;
use crate::domain::{CreateUserRequest, CreateUserResponse, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user with its phones
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse>;

    /// Look a user up by id.
    ///
    /// A missing or blank id is a validation error. An id that is not a
    /// canonical UUID yields `Ok(None)`, same as an unknown one.
    async fn get_user_by_id(&self, id: Option<&str>) -> AppResult<Option<UserResponse>>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    validator: UserValidator,
    assembler: UserAssembler,
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    pub fn new(
        validator: UserValidator,
        assembler: UserAssembler,
        repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            validator,
            assembler,
            repo,
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, request: CreateUserRequest) -> AppResult<CreateUserResponse> {
        let email = self
            .validator
            .validate_email(request.email.as_deref())
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Registration rejected"))?;
        let password = self
            .validator
            .validate_password(request.password.as_deref())
            .inspect_err(|e| tracing::warn!(error = %e, "Registration rejected"))?;

        let new_user = self.assembler.build_user(Registration {
            name: request.name.as_deref(),
            email,
            password,
            phones: request.phones.as_deref().unwrap_or_default(),
        })?;

        let user = self.repo.save(new_user).await?;
        tracing::info!(user_id = %user.id, phones = user.phones.len(), "User created");

        Ok(CreateUserResponse::from(user))
    }

    async fn get_user_by_id(&self, id: Option<&str>) -> AppResult<Option<UserResponse>> {
        let id = id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::field_validation(USER_ID_REQUIRED_MESSAGE))?;

        if !self.validator.patterns().is_valid_user_id(id) {
            tracing::debug!(id, "Lookup id is not a UUID, treating as not found");
            return Ok(None);
        }
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        Ok(self.repo.find_by_id(uuid).await?.map(UserResponse::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_PASSWORD_VALIDATION_REGEX, EMAIL_VALIDATION_REGEX};
    use crate::domain::{NewUser, Phone, PhoneRequest, User};
    use crate::infra::MockUserRepository;
    use crate::services::{MockEncryptionService, ValidationPatterns};

    fn stored(user: NewUser) -> User {
        let id = Uuid::new_v4();
        User {
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
                .zip(1..)
                .map(|(phone, phone_id)| Phone {
                    id: phone_id,
                    user_id: id,
                    number: phone.number,
                    city_code: phone.city_code,
                    country_code: phone.country_code,
                })
                .collect(),
        }
    }

    fn manager(repo: MockUserRepository, encryption: MockEncryptionService) -> UserManager {
        let repo: Arc<dyn UserRepository> = Arc::new(repo);
        let patterns = Arc::new(
            ValidationPatterns::new(EMAIL_VALIDATION_REGEX, DEFAULT_PASSWORD_VALIDATION_REGEX)
                .unwrap(),
        );
        UserManager::new(
            UserValidator::new(patterns, repo.clone()),
            UserAssembler::new(Arc::new(encryption)),
            repo,
        )
    }

    fn untouched_encryption() -> MockEncryptionService {
        let mut encryption = MockEncryptionService::new();
        encryption.expect_hash_password().never();
        encryption.expect_issue_token().never();
        encryption
    }

    fn jane_request() -> CreateUserRequest {
        CreateUserRequest {
            name: Some("Jane".to_string()),
            email: Some("jane@example.com".to_string()),
            password: Some("Hunter2024!".to_string()),
            phones: Some(vec![PhoneRequest {
                number: "12345678".to_string(),
                city_code: "1".to_string(),
                country_code: "57".to_string(),
            }]),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().times(1).returning(|_| Ok(None));
        repo.expect_save()
            .withf(|user| user.email == "jane@example.com" && user.password_hash == "hashed")
            .times(1)
            .returning(|user| Ok(stored(user)));

        let mut encryption = MockEncryptionService::new();
        encryption
            .expect_hash_password()
            .returning(|_| Ok("hashed".to_string()));
        encryption
            .expect_issue_token()
            .returning(|_| Ok("token".to_string()));

        let response = manager(repo, encryption)
            .create_user(jane_request())
            .await
            .unwrap();

        assert!(!response.id.is_nil());
        assert_eq!(response.token, "token");
        assert!(response.is_active);
        assert_eq!(response.created, response.last_login);
        assert_eq!(response.phones.len(), 1);
        assert_eq!(response.phones[0].number, "12345678");
        assert_eq!(response.phones[0].city_code, "1");
        assert_eq!(response.phones[0].country_code, "57");
    }

    #[tokio::test]
    async fn test_create_user_invalid_email_persists_nothing() {
        for email in [None, Some("jane.example.com"), Some("jane@example")] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_email().never();
            repo.expect_save().never();

            let request = CreateUserRequest {
                email: email.map(str::to_string),
                ..jane_request()
            };
            let err = manager(repo, untouched_encryption())
                .create_user(request)
                .await
                .unwrap_err();

            assert!(err.is_field_validation());
            assert_eq!(err.to_string(), "Invalid email");
        }
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .times(1)
            .returning(|email| {
                Ok(Some(stored(NewUser {
                    name: None,
                    email: email.to_string(),
                    password_hash: "hash".to_string(),
                    created_at: chrono::Utc::now(),
                    last_login: chrono::Utc::now(),
                    is_active: true,
                    token: "token".to_string(),
                    phones: Vec::new(),
                })))
            });
        repo.expect_save().never();

        let err = manager(repo, untouched_encryption())
            .create_user(jane_request())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::FieldValidation(ref msg) if msg == "Email already registered"));
    }

    #[tokio::test]
    async fn test_create_user_invalid_password_persists_nothing() {
        for password in [None, Some("short"), Some("with spaces inside")] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_email().returning(|_| Ok(None));
            repo.expect_save().never();

            let request = CreateUserRequest {
                password: password.map(str::to_string),
                ..jane_request()
            };
            let err = manager(repo, untouched_encryption())
                .create_user(request)
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), "Invalid password");
        }
    }

    #[tokio::test]
    async fn test_create_user_storage_duplicate_is_field_validation() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_save()
            .times(1)
            .returning(|_| Err(AppError::field_validation("Email already registered")));

        let mut encryption = MockEncryptionService::new();
        encryption
            .expect_hash_password()
            .returning(|_| Ok("hashed".to_string()));
        encryption
            .expect_issue_token()
            .returning(|_| Ok("token".to_string()));

        let err = manager(repo, encryption)
            .create_user(jane_request())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[tokio::test]
    async fn test_get_user_by_id_requires_id() {
        for id in [None, Some(""), Some("   ")] {
            let mut repo = MockUserRepository::new();
            repo.expect_find_by_id().never();

            let err = manager(repo, untouched_encryption())
                .get_user_by_id(id)
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::FieldValidation(ref msg) if msg == "User id required"));
        }
    }

    #[tokio::test]
    async fn test_get_user_by_id_malformed_is_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().never();

        let result = manager(repo, untouched_encryption())
            .get_user_by_id(Some("not-a-uuid"))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_user_by_id_unknown_is_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));

        let result = manager(repo, untouched_encryption())
            .get_user_by_id(Some(&Uuid::new_v4().to_string()))
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_get_user_by_id_found() {
        let now = chrono::Utc::now();
        let user = stored(NewUser {
            name: Some("Jane".to_string()),
            email: "jane@example.com".to_string(),
            password_hash: "secret-hash".to_string(),
            created_at: now,
            last_login: now,
            is_active: true,
            token: "token".to_string(),
            phones: Vec::new(),
        });
        let id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .withf(move |lookup| *lookup == id)
            .times(1)
            .returning(move |_| Ok(Some(user.clone())));

        let response = manager(repo, untouched_encryption())
            .get_user_by_id(Some(&id.to_string()))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.id, id);
        assert_eq!(response.email, "jane@example.com");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("secret-hash"));
        assert!(!json.contains("password"));
    }
}
