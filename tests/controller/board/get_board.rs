use super::*;

#[tokio::test]
/// Expect 200 OK for the owner
async fn returns_ok_for_owner() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;

    let result = get_board(State(test.into_app_state()), user(1), Path(board.id)).await;

    assert_eq!(status(result), StatusCode::OK);

    Ok(())
}

#[tokio::test]
/// Expect 403 Forbidden for another user and 404 Not Found for a missing board
async fn returns_forbidden_or_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_user("bob")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;

    let result = get_board(State(test.into_app_state()), user(2), Path(board.id)).await;
    assert_eq!(status(result), StatusCode::FORBIDDEN);

    let result = get_board(State(test.into_app_state()), user(1), Path(99)).await;
    assert_eq!(status(result), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
/// Expect 204 No Content when the owner deletes the board
async fn delete_returns_no_content() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_user("alice")
        .with_board_tables()
        .build()
        .await?;
    let board = test.board().insert_board(1, "Roadmap").await?;

    let result = delete_board(State(test.into_app_state()), user(1), Path(board.id)).await;

    assert_eq!(status(result), StatusCode::NO_CONTENT);

    Ok(())
}
