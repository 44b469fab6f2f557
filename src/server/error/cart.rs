use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Product {0} does not exist")]
    ProductNotFound(i32),
    #[error("Cart item {0} is not in the user's cart")]
    ItemNotFound(i32),
    #[error("User {0} has no cart")]
    CartNotFound(i32),
    #[error("Product {product_id} has {available} in stock but {requested} were requested")]
    InsufficientStock {
        product_id: i32,
        available: i32,
        requested: i32,
    },
}

impl IntoResponse for CartError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::ProductNotFound(_) => error_response(StatusCode::NOT_FOUND, "Product not found"),
            Self::ItemNotFound(_) => error_response(StatusCode::NOT_FOUND, "Cart item not found"),
            Self::CartNotFound(_) => error_response(StatusCode::NOT_FOUND, "Cart not found"),
            Self::InsufficientStock { available, .. } => error_response(
                StatusCode::BAD_REQUEST,
                format!("Insufficient stock. Only {} available", available),
            ),
        }
    }
}
