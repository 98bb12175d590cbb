//! Application error type and its HTTP mapping.
//!
//! Every layer returns `AppResult<T>`; the HTTP layer turns an `AppError`
//! into a `{"error": {"code", "message"}}` body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A single request field was rejected before anything was persisted
    #[error("{0}")]
    FieldValidation(String),

    #[error("User not found")]
    NotFound,

    #[error("Database failure: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Token signing failure: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("{0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'static str,
    message: &'a str,
}

impl AppError {
    pub fn field_validation(msg: impl Into<String>) -> Self {
        Self::FieldValidation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for rejections of caller input, false for infrastructure failures
    pub fn is_field_validation(&self) -> bool {
        matches!(self, Self::FieldValidation(_))
    }

    /// HTTP status and stable error code reported to clients
    fn classify(&self) -> (StatusCode, &'static str) {
        match self {
            Self::FieldValidation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            Self::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR"),
            Self::Jwt(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TOKEN_ERROR"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }

    /// Message safe to show to clients. Server-side failures get a generic text.
    fn public_message(&self) -> String {
        match self {
            Self::FieldValidation(_) | Self::NotFound => self.to_string(),
            Self::Database(_) => "A database error occurred".to_string(),
            Self::Jwt(_) => "Token could not be issued".to_string(),
            Self::Internal(_) => "An internal error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();
        if status.is_server_error() {
            tracing::error!(code, error = ?self, "Request failed");
        }

        let message = self.public_message();
        let body = ErrorEnvelope {
            error: ErrorDetail {
                code,
                message: &message,
            },
        };
        (status, Json(body)).into_response()
    }
}
