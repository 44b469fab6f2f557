use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Request has no bearer token")]
    MissingToken,
    #[error("Bearer token is invalid or expired")]
    InvalidToken,
    #[error("Email or password did not match")]
    InvalidCredentials,
    #[error("Email is already registered")]
    EmailTaken,
    #[error("Username is already taken")]
    UsernameTaken,
    #[error("User does not have the role required for this route")]
    Forbidden,
    #[error("User ID {0:?} not found in database despite holding a valid token")]
    UserNotFound(i32),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken => error_response(StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid or expired token")
            }
            Self::InvalidCredentials => {
                error_response(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            Self::EmailTaken => error_response(StatusCode::CONFLICT, "Email already registered"),
            Self::UsernameTaken => error_response(StatusCode::CONFLICT, "Username already taken"),
            Self::Forbidden => error_response(StatusCode::FORBIDDEN, "Insufficient permissions"),
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
        }
    }
}
