use super::*;

#[tokio::test]
/// Expect 201 Created for a titled board
async fn returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;

    let result = create_board(
        State(test.into_app_state()),
        user(1),
        Json(CreateBoardDto {
            title: "Roadmap".to_string(),
            description: None,
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request for a blank title
async fn returns_bad_request_for_blank_title() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;

    let result = create_board(
        State(test.into_app_state()),
        user(1),
        Json(CreateBoardDto::default()),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
