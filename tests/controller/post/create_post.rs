use super::*;

fn content(text: &str) -> Json<PostContentDto> {
    Json(PostContentDto {
        content: text.to_string(),
    })
}

#[tokio::test]
/// Expect 201 Created for non-empty content
async fn returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_social_tables()
        .build()
        .await?;

    let result = create_post(State(test.into_app_state()), user(1), content("hello world")).await;

    assert_eq!(status(result), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request for blank or oversized content
async fn returns_bad_request_for_invalid_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_social_tables()
        .build()
        .await?;
    let state = test.into_app_state();

    let blank = create_post(State(state.clone()), user(1), content("  ")).await;
    assert_eq!(status(blank), StatusCode::BAD_REQUEST);

    let long = create_post(State(state), user(1), content(&"a".repeat(1001))).await;
    assert_eq!(status(long), StatusCode::BAD_REQUEST);

    Ok(())
}
