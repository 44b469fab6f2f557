//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the application.
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same query code runs
//! against a plain connection or inside a transaction. They are organized by domain:
//! users, chat, the shop (products, carts, orders), the social graph (posts, follows) and
//! task boards (boards, columns, tasks).

pub mod board;
pub mod cart;
pub mod chat;
pub mod follow;
pub mod order;
pub mod post;
pub mod product;
pub mod user;

/// Row offset of a 1-based page, saturating at the largest offset SQL engines accept.
pub(crate) fn page_offset(page: u64, limit: u64) -> u64 {
    page.saturating_sub(1)
        .saturating_mul(limit)
        .min(i64::MAX as u64)
}
