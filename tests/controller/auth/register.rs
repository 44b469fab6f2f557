use super::*;

#[tokio::test]
/// Expect 201 Created for a valid registration
async fn returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = register(
        State(test.into_app_state()),
        Json(registration("Alice@Example.com", "alice")),
    )
    .await;

    assert_eq!(status(result), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 409 Conflict when the email is already registered, in any letter case
async fn returns_conflict_for_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;
    let state = test.into_app_state();

    let first = register(State(state.clone()), Json(registration("alice@example.com", "alice"))).await;
    assert_eq!(status(first), StatusCode::CREATED);

    let second = register(State(state), Json(registration(" ALICE@example.com", "alice2"))).await;
    assert_eq!(status(second), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request for a weak password and malformed username
async fn returns_bad_request_for_invalid_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let mut payload = registration("alice@example.com", "a!");
    payload.password = "password".to_string();

    let result = register(State(test.into_app_state()), Json(payload)).await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
