use super::*;

#[tokio::test]
/// Expect 401 Unauthorized for a protected route without a token
async fn protected_route_requires_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;

    let response = send(&test, get("/api/cart")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 401 Unauthorized for a malformed token
async fn protected_route_rejects_bad_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_shop_tables().build().await?;
    let request = Request::builder()
        .uri("/api/cart")
        .header(AUTHORIZATION, "Bearer not-a-token")
        .body(Body::empty())
        .unwrap();

    let response = send(&test, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
/// Expect 200 OK for a protected route with a token issued at login
async fn protected_route_accepts_issued_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let alice = test.user().insert_user("alice").await?;
    let token = test.into_app_state().jwt.issue(&alice).unwrap();
    let request = Request::builder()
        .uri("/api/auth/me")
        .header(AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = send(&test, request).await;

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 Unauthorized before any upgrade when the socket has no token
async fn socket_requires_token() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let response = send(&test, get("/api/chat/ws")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
