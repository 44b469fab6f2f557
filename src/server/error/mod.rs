//! Error types for the Bubble server application.
//!
//! This module provides the error handling system with specialized error types for each
//! domain (authentication, validation, chat, products, cart, orders, social, boards). All errors
//! implement `IntoResponse` for Axum HTTP responses and use `thiserror` for ergonomic
//! error definitions with automatic `Display` and `Error` trait implementations.

pub mod auth;
pub mod board;
pub mod cart;
pub mod chat;
pub mod config;
pub mod order;
pub mod product;
pub mod social;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, board::BoardError, cart::CartError, chat::ChatError, config::ConfigError,
        order::OrderError, product::ProductError, social::SocialError,
        validation::ValidationError,
    },
};

/// Main error type for the Bubble server application.
///
/// This enum aggregates all domain-specific error types and external library errors into a
/// single unified error type. It uses `thiserror`'s `#[from]` attribute to enable automatic
/// conversion from underlying error types via the `?` operator. The `IntoResponse` implementation
/// maps errors to appropriate HTTP responses for API consumers.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Authentication and authorization errors (tokens, credentials, roles)
/// - Request validation errors (field-level rule failures)
/// - Domain errors (chat, products, cart, orders, posts, follows and boards)
/// - External library errors (database, JWT, password hashing, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication error (missing/invalid token, bad credentials, insufficient role).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// One or more request fields failed validation.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Chat room or message error.
    #[error(transparent)]
    ChatError(#[from] ChatError),
    /// Product catalogue error.
    #[error(transparent)]
    ProductError(#[from] ProductError),
    /// Shopping cart error.
    #[error(transparent)]
    CartError(#[from] CartError),
    /// Order lifecycle error.
    #[error(transparent)]
    OrderError(#[from] OrderError),
    /// Post or follow error.
    #[error(transparent)]
    SocialError(#[from] SocialError),
    /// Board, column or task error.
    #[error(transparent)]
    BoardError(#[from] BoardError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in Bubble's code.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] DbErr),
    /// Token encoding error.
    #[error(transparent)]
    JwtError(#[from] jsonwebtoken::errors::Error),
    /// Password hashing error.
    #[error(transparent)]
    PasswordHashError(#[from] argon2::password_hash::Error),
    /// IO error (binding the listener, writing logs).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors delegate to their own `IntoResponse` implementation. Database errors
/// are classified: unique constraint violations become 409 Conflict and missing records
/// become 404 Not Found. Everything else is a logged 500 Internal Server Error.
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            Self::ChatError(err) => err.into_response(),
            Self::ProductError(err) => err.into_response(),
            Self::CartError(err) => err.into_response(),
            Self::OrderError(err) => err.into_response(),
            Self::SocialError(err) => err.into_response(),
            Self::BoardError(err) => err.into_response(),
            Self::DbErr(err) => db_err_response(err),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn db_err_response(err: DbErr) -> Response {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        tracing::debug!("Unique constraint violation: {}", detail);

        return error_response(StatusCode::CONFLICT, "Resource already exists");
    }

    if let DbErr::RecordNotFound(detail) = &err {
        tracing::debug!("Record not found: {}", detail);

        return error_response(StatusCode::NOT_FOUND, "Resource not found");
    }

    InternalServerError(err).into_response()
}

/// Builds a JSON error response with the given status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorDto::new(message))).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use sea_orm::DbErr;

    use super::Error;
    use crate::server::error::{auth::AuthError, chat::ChatError};

    /// Expect 404 when a record lookup by primary key fails
    #[test]
    fn record_not_found_maps_to_not_found() {
        let resp = Error::DbErr(DbErr::RecordNotFound("user".to_string())).into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    /// Expect 500 for generic database failures
    #[test]
    fn generic_db_error_maps_to_internal_server_error() {
        let resp = Error::DbErr(DbErr::Custom("boom".to_string())).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    /// Expect domain errors to keep their own status codes when wrapped
    #[test]
    fn domain_errors_delegate_status() {
        let resp = Error::from(AuthError::Forbidden).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let resp = Error::from(ChatError::NotParticipant(1)).into_response();
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    /// Expect internal errors to be hidden behind a 500
    #[test]
    fn internal_error_maps_to_internal_server_error() {
        let resp = Error::InternalError("bug".to_string()).into_response();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
