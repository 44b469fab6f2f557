use super::*;

#[tokio::test]
/// Expect 201 Created, then 409 Conflict for the same pair
async fn returns_conflict_when_already_following() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_user("bob")
        .with_social_tables()
        .build()
        .await?;
    let state = test.into_app_state();

    let first = follow(State(state.clone()), user(1), Path(2)).await;
    assert_eq!(status(first), StatusCode::CREATED);

    let second = follow(State(state), user(1), Path(2)).await;
    assert_eq!(status(second), StatusCode::CONFLICT);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request when following yourself
async fn returns_bad_request_for_self() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_social_tables()
        .build()
        .await?;

    let result = follow(State(test.into_app_state()), user(1), Path(1)).await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 Not Found for an unknown user
async fn returns_not_found_for_unknown_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_social_tables()
        .build()
        .await?;

    let result = follow(State(test.into_app_state()), user(1), Path(99)).await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}
