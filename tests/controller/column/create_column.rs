use super::*;

#[tokio::test]
/// Expect 201 Created on the caller's board
async fn returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;

    let result = create_column(
        State(test.into_app_state()),
        user(1),
        Path(board.id),
        Json(CreateColumnDto {
            title: "Todo".to_string(),
            order: None,
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request for a negative order
async fn returns_bad_request_for_negative_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;

    let result = create_column(
        State(test.into_app_state()),
        user(1),
        Path(board.id),
        Json(CreateColumnDto {
            title: "Todo".to_string(),
            order: Some(-1),
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
