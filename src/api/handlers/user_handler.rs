//! User registration and lookup handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateUserRequest, CreateUserResponse, UserResponse};
use crate::errors::{AppError, AppResult};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/:id", get(get_user))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered", body = CreateUserResponse),
        (status = 400, description = "Invalid email, invalid password, duplicate email or malformed body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<CreateUserResponse>)> {
    let created = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 400, description = "Blank user id"),
        (status = 404, description = "User not found or id is not a UUID")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .user_service
        .get_user_by_id(Some(&id))
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(user))
}
