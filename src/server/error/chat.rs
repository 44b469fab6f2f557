use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("User is not a participant of chat room {0}")]
    NotParticipant(i32),
    #[error("Chat room {0} does not exist")]
    RoomNotFound(i32),
    #[error("Direct chat request is missing the participant ID")]
    MissingParticipant,
    #[error("User tried to open a direct chat with themselves")]
    SelfChat,
    #[error("Group chat request has a blank name")]
    MissingGroupName,
    #[error("Group chat request has no participants")]
    NoParticipants,
    #[error("Message content is empty")]
    EmptyMessage,
    #[error("User ID {0} does not exist")]
    UnknownUser(i32),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotParticipant(_) => error_response(
                StatusCode::FORBIDDEN,
                "Not authorized to access this chat room",
            ),
            Self::RoomNotFound(_) => error_response(StatusCode::NOT_FOUND, "Chat room not found"),
            Self::MissingParticipant => {
                error_response(StatusCode::BAD_REQUEST, "Participant ID is required")
            }
            Self::SelfChat => {
                error_response(StatusCode::BAD_REQUEST, "Cannot create chat with yourself")
            }
            Self::MissingGroupName => {
                error_response(StatusCode::BAD_REQUEST, "Group name is required")
            }
            Self::NoParticipants => error_response(
                StatusCode::BAD_REQUEST,
                "At least one participant is required",
            ),
            Self::EmptyMessage => {
                error_response(StatusCode::BAD_REQUEST, "Message content is required")
            }
            Self::UnknownUser(_) => {
                error_response(StatusCode::BAD_REQUEST, "One or more users not found")
            }
        }
    }
}
