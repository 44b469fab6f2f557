//! Shared helpers for controller tests.

use axum::{
    body::{to_bytes, Body},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bubble::server::{
    error::Error,
    model::{app::AppState, auth::AuthUser},
    service::chat::hub::ChatHub,
    util::jwt::JwtKeys,
};
use bubble_test_utils::{constant::TEST_JWT_SECRET, TestContext};
use entity::sea_orm_active_enums::Role;

/// Extension trait for TestContext to build the application state around its database
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState {
            db: self.db.clone(),
            jwt: JwtKeys::new(TEST_JWT_SECRET, 1),
            hub: ChatHub::default(),
        }
    }
}

pub fn user(id: i32) -> AuthUser {
    AuthUser {
        id,
        role: Role::User,
    }
}

pub fn admin(id: i32) -> AuthUser {
    AuthUser {
        id,
        role: Role::Admin,
    }
}

/// Status code of a handler result, whether it succeeded or not
pub fn status<T: IntoResponse>(result: Result<T, Error>) -> StatusCode {
    match result {
        Ok(response) => response.into_response().status(),
        Err(err) => err.into_response().status(),
    }
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
