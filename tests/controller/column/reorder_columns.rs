use super::*;

#[tokio::test]
/// Expect 200 OK for a complete permutation of the board's columns
async fn returns_ok_for_permutation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;
    let todo = test.board().insert_column(board.id, "Todo", 0).await?;
    let done = test.board().insert_column(board.id, "Done", 1).await?;

    let result = reorder_columns(
        State(test.into_app_state()),
        user(1),
        Path(board.id),
        Json(ReorderDto {
            ordered_ids: vec![done.id, todo.id],
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::OK);
    assert_eq!(test.board().column_titles(board.id).await?, ["Done", "Todo"]);

    Ok(())
}

#[tokio::test]
/// Expect 400 Bad Request when a column is left out
async fn returns_bad_request_for_partial_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;
    let todo = test.board().insert_column(board.id, "Todo", 0).await?;
    test.board().insert_column(board.id, "Done", 1).await?;

    let result = reorder_columns(
        State(test.into_app_state()),
        user(1),
        Path(board.id),
        Json(ReorderDto {
            ordered_ids: vec![todo.id],
        }),
    )
    .await;

    assert_eq!(status(result), StatusCode::BAD_REQUEST);

    Ok(())
}
