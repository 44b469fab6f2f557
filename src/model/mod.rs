//! API data transfer objects.
//!
//! Request and response bodies for every route. All types serialize with camelCase
//! field names and derive `utoipa::ToSchema` for the OpenAPI document.

pub mod api;
pub mod auth;
pub mod board;
pub mod cart;
pub mod chat;
pub mod order;
pub mod product;
pub mod social;
pub mod user;
