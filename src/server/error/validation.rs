use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::{ErrorDto, FieldErrorDto};

/// One or more request fields broke a validation rule.
///
/// Responds with 400 and lists every failed field in `details`.
#[derive(Error, Debug)]
#[error("Validation failed for {} field(s)", .0.len())]
pub struct ValidationError(pub Vec<FieldErrorDto>);

impl ValidationError {
    /// Shorthand for a failure on a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldErrorDto::new(field, message)])
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!(fields = ?self.0, "{}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: "Validation failed".to_string(),
                details: Some(self.0),
            }),
        )
            .into_response()
    }
}
