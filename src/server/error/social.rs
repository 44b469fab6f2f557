use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum SocialError {
    #[error("Post {0} does not exist")]
    PostNotFound(i32),
    #[error("User does not own post {0}")]
    NotPostOwner(i32),
    #[error("User tried to follow themselves")]
    SelfFollow,
    #[error("Already following user {0}")]
    AlreadyFollowing(i32),
    #[error("Not following user {0}")]
    NotFollowing(i32),
    #[error("User {0} does not exist")]
    UserNotFound(i32),
}

impl IntoResponse for SocialError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::PostNotFound(_) => error_response(StatusCode::NOT_FOUND, "Post not found"),
            Self::NotPostOwner(_) => error_response(
                StatusCode::FORBIDDEN,
                "Not authorized to modify this post",
            ),
            Self::SelfFollow => error_response(StatusCode::BAD_REQUEST, "Cannot follow yourself"),
            Self::AlreadyFollowing(_) => {
                error_response(StatusCode::CONFLICT, "Already following this user")
            }
            Self::NotFollowing(_) => {
                error_response(StatusCode::NOT_FOUND, "Not following this user")
            }
            Self::UserNotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
        }
    }
}
