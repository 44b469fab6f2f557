use super::*;

#[tokio::test]
/// Expect 200 OK when moving to another column of the caller's board
async fn returns_ok_for_other_column() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;
    let todo = test.board().insert_column(board.id, "Todo", 0).await?;
    let done = test.board().insert_column(board.id, "Done", 1).await?;
    let task = test.board().insert_task(todo.id, 1, "Write", 0).await?;

    let result = move_task(
        State(test.into_app_state()),
        user(1),
        Path(task.id),
        Json(MoveTaskDto {
            column_id: Some(done.id),
            order: None,
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::OK);
    assert_eq!(
        test.board().task_positions(done.id).await?,
        vec![("Write".to_string(), 0)]
    );

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request when the task already is in the target column
async fn returns_bad_request_for_same_column() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;
    let todo = test.board().insert_column(board.id, "Todo", 0).await?;
    let task = test.board().insert_task(todo.id, 1, "Write", 0).await?;

    let result = move_task(
        State(test.into_app_state()),
        user(1),
        Path(task.id),
        Json(MoveTaskDto {
            column_id: Some(todo.id),
            order: None,
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
