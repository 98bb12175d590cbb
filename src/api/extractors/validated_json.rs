//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;

/// JSON body that has been deserialized and checked with `validator`.
///
/// Both malformed bodies and failed validation reject with
/// `AppError::FieldValidation`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::field_validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::field_validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// One step of a field path; list indexes compare numerically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum PathSegment {
    Field(String),
    Index(usize),
}

/// Flatten nested validation errors into one message, ordered by field path.
fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages(errors, &[], &mut messages);
    messages.sort();
    messages
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join(", ")
}

fn collect_messages(
    errors: &ValidationErrors,
    prefix: &[PathSegment],
    out: &mut Vec<(Vec<PathSegment>, String)>,
) {
    for (field, kind) in errors.errors() {
        let mut path = prefix.to_vec();
        path.push(PathSegment::Field(field.to_string()));

        match kind {
            ValidationErrorsKind::Field(errs) => {
                for e in errs {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", field));
                    out.push((path.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let mut item_path = path.clone();
                    item_path.push(PathSegment::Index(*index));
                    collect_messages(nested, &item_path, out);
                }
            }
        }
    }
}
