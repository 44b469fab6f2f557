//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors and the resulting status codes
//! are checked. The `router` module drives the full router for behaviour that happens
//! before a handler runs.

mod auth;
mod board;
mod cart;
mod chat;
mod column;
mod follow;
mod order;
mod post;
mod product;
mod router;
mod task;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bubble_test_utils::prelude::*;

use crate::util::{admin, status, user, TestContextExt};
