use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Board {0} does not exist")]
    BoardNotFound(i32),
    #[error("Column {0} does not exist")]
    ColumnNotFound(i32),
    #[error("Task {0} does not exist")]
    TaskNotFound(i32),
    #[error("User does not own board {0}")]
    NotBoardOwner(i32),
    /// A reorder request did not list every ID of the collection exactly once.
    #[error("Reorder IDs do not match the {0} being reordered")]
    InvalidReorder(&'static str),
    #[error("Task {task_id} is already in column {column_id}")]
    SameColumn { task_id: i32, column_id: i32 },
    #[error("Assignee {0} does not exist")]
    AssigneeNotFound(i32),
}

impl IntoResponse for BoardError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::BoardNotFound(_) => error_response(StatusCode::NOT_FOUND, "Board not found"),
            Self::ColumnNotFound(_) => error_response(StatusCode::NOT_FOUND, "Column not found"),
            Self::TaskNotFound(_) => error_response(StatusCode::NOT_FOUND, "Task not found"),
            Self::NotBoardOwner(_) => error_response(
                StatusCode::FORBIDDEN,
                "Not authorized to access this board",
            ),
            Self::InvalidReorder(kind) => error_response(
                StatusCode::BAD_REQUEST,
                format!("Ordered IDs must list every one of the {} exactly once", kind),
            ),
            Self::SameColumn { .. } => {
                error_response(StatusCode::BAD_REQUEST, "Task is already in this column")
            }
            Self::AssigneeNotFound(_) => {
                error_response(StatusCode::BAD_REQUEST, "Assignee does not exist")
            }
        }
    }
}
