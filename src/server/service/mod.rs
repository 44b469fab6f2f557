//! Service layer for business logic.
//!
//! This module contains the service layer that implements business rules on top of the
//! repositories: authentication, users, chat rooms and messages (plus the realtime
//! connection hub), the product catalogue, carts, orders, posts, follows and task boards. Services
//! borrow the database connection and return domain errors that controllers map to
//! HTTP responses.

pub mod auth;
pub mod board;
pub mod cart;
pub mod chat;
pub mod follow;
pub mod order;
pub mod post;
pub mod product;
pub mod user;
