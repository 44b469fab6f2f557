//! Test fixture modules for database record creation.
//!
//! Each submodule adds an accessor on [`TestContext`](crate::TestContext) returning a
//! fixture helper for one domain:
//!
//! - `user` - user accounts
//! - `chat` - chat rooms, participants and messages
//! - `shop` - products, carts and orders
//! - `social` - posts and follows
//! - `board` - boards, columns and tasks

pub mod board;
pub mod chat;
pub mod shop;
pub mod social;
pub mod user;
