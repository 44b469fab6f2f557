use super::*;

fn credentials(password: &str) -> LoginDto {
    LoginDto {
        email: "alice@example.com".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
/// Expect 200 OK with the password used at registration
async fn returns_success_for_valid_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = test.into_app_state();

    let registered =
        register(State(state.clone()), Json(registration("alice@example.com", "alice"))).await;
    assert_eq!(status(registered), StatusCode::CREATED);

    let result = login(State(state), Json(credentials("Secret123"))).await;

    assert_eq!(status(result), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 401 Unauthorized for a wrong password and for an unknown email alike
async fn returns_unauthorized_for_bad_credentials() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = test.into_app_state();

    let unknown = login(State(state.clone()), Json(credentials("Secret123"))).await;
    assert_eq!(status(unknown), StatusCode::UNAUTHORIZED);

    let registered =
        register(State(state.clone()), Json(registration("alice@example.com", "alice"))).await;
    assert_eq!(status(registered), StatusCode::CREATED);

    let wrong = login(State(state), Json(credentials("Secret124"))).await;
    assert_eq!(status(wrong), StatusCode::UNAUTHORIZED);

    Ok(())
}
