//! Requests driven through the full router, covering extraction and fallbacks.

mod auth_guard;
mod boards;
mod fallback;

use axum::{
    body::Body,
    http::{header::AUTHORIZATION, Request},
    response::Response,
};
use bubble::server::router::routes;
use tower::ServiceExt;

use super::*;

async fn send(test: &TestContext, request: Request<Body>) -> Response {
    routes()
        .with_state(test.into_app_state())
        .oneshot(request)
        .await
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}
