use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("Order {0} does not exist")]
    NotFound(i32),
    #[error("User does not own order {0}")]
    NotOwner(i32),
    #[error("Cannot place an order from an empty cart")]
    EmptyCart,
    #[error("Order status cannot change from {from} to {to}")]
    InvalidTransition { from: String, to: String },
    #[error("Order in status {0} cannot be cancelled")]
    NotCancellable(String),
    #[error("Product {name} has {available} in stock but {requested} were ordered")]
    InsufficientStock {
        name: String,
        available: i32,
        requested: i32,
    },
    #[error("Product {0} in the cart no longer exists")]
    ProductGone(i32),
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "Order not found"),
            Self::NotOwner(_) => error_response(
                StatusCode::FORBIDDEN,
                "Not authorized to access this order",
            ),
            Self::EmptyCart => error_response(StatusCode::BAD_REQUEST, "Cart is empty"),
            Self::InvalidTransition { from, .. } => error_response(
                StatusCode::BAD_REQUEST,
                format!("Cannot change status of a {} order", from),
            ),
            Self::NotCancellable(status) => error_response(
                StatusCode::BAD_REQUEST,
                format!("Cannot cancel order with status {}", status),
            ),
            Self::InsufficientStock {
                name, available, ..
            } => error_response(
                StatusCode::BAD_REQUEST,
                format!("Insufficient stock for {}. Only {} available", name, available),
            ),
            Self::ProductGone(product_id) => error_response(
                StatusCode::BAD_REQUEST,
                format!("Product {} no longer exists", product_id),
            ),
        }
    }
}
