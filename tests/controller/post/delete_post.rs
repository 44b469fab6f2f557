use super::*;

#[tokio::test]
/// Expect 204 No Content when the author deletes their post
async fn returns_no_content_for_author() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_social_tables()
        .build()
        .await?;
    let post = test.social().insert_post(1, "first").await?;

    let result = delete_post(State(test.into_app_state()), user(1), Path(post.id)).await;

    assert_eq!(status(result), StatusCode::NO_CONTENT);

    Ok(())
}

#[tokio::test]
/// Expect 403 Forbidden when someone else deletes the post
async fn returns_forbidden_for_other_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_user("bob")
        .with_social_tables()
        .build()
        .await?;
    let post = test.social().insert_post(1, "first").await?;

    let result = delete_post(State(test.into_app_state()), user(2), Path(post.id)).await;

    assert_eq!(status(result), StatusCode::FORBIDDEN);

    Ok(())
}
