//! HTTP controller endpoints for the Bubble web API.
//!
//! This module contains Axum handlers for authentication, users, chat (REST and the
//! realtime WebSocket), products, carts, orders, posts, follows and task boards. Controllers extract
//! the authenticated user and request payload, call into services, and map results to
//! HTTP responses. Every handler is annotated for the utoipa OpenAPI document.

pub mod auth;
pub mod board;
pub mod cart;
pub mod chat;
pub mod column;
pub mod follow;
pub mod order;
pub mod post;
pub mod product;
pub mod socket;
pub mod task;
pub mod user;
