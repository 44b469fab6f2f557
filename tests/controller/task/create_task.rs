use super::*;

#[tokio::test]
/// Expect 201 Created in a column of the caller's board
async fn returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;
    let column = test.board().insert_column(board.id, "Todo", 0).await?;

    let result = create_task(
        State(test.into_app_state()),
        user(1),
        Path(column.id),
        Json(CreateTaskDto {
            title: "Write".to_string(),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::CREATED);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request for an assignee that does not exist
async fn returns_bad_request_for_unknown_assignee() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;
    let column = test.board().insert_column(board.id, "Todo", 0).await?;

    let result = create_task(
        State(test.into_app_state()),
        user(1),
        Path(column.id),
        Json(CreateTaskDto {
            title: "Write".to_string(),
            assignee_id: Some(42),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}

#[tokio::test]
/// Expect 404 Not Found for a missing column
async fn returns_not_found_for_missing_column() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;

    let result = create_task(
        State(test.into_app_state()),
        user(1),
        Path(7),
        Json(CreateTaskDto {
            title: "Write".to_string(),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}
