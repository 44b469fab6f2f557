use super::*;

#[tokio::test]
/// Expect 200 OK for an existing user
async fn returns_success_for_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("alice").build().await?;

    let result = me(State(test.into_app_state()), user(1)).await;

    assert_eq!(status(result), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 404 Not Found when the token outlived the account
async fn returns_not_found_for_deleted_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user_tables().build().await?;

    let result = me(State(test.into_app_state()), user(1)).await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 500 Internal Server Error when required database tables dont exist
async fn error_when_required_tables_dont_exist() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = me(State(test.into_app_state()), user(1)).await;

    assert_eq!(status(result), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
