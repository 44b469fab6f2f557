use super::*;

#[tokio::test]
/// Expect 204 No Content for an existing follow, 404 Not Found afterwards
async fn removes_follow_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_user("bob")
        .with_social_tables()
        .build()
        .await?;
    test.social().insert_follow(1, 2).await?;
    let state = test.into_app_state();

    let first = unfollow(State(state.clone()), user(1), Path(2)).await;
    assert_eq!(status(first), StatusCode::NO_CONTENT);

    let second = unfollow(State(state), user(1), Path(2)).await;
    assert_eq!(status(second), StatusCode::NOT_FOUND);

    Ok(())
}
