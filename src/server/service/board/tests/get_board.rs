use crate::model::board::{CreateBoardDto, UpdateBoardDto};

use super::*;

/// Expect a trimmed title, a dropped blank description and the caller as owner
#[tokio::test]
async fn creates_board() -> Result<(), TestError> {
    let test = board_test().await?;

    let board = BoardService::new(&test.db)
        .create_board(
            1,
            CreateBoardDto {
                title: "  Roadmap ".to_string(),
                description: Some("   ".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(board.title, "Roadmap");
    assert_eq!(board.description, None);
    assert_eq!(board.owner_id, 1);

    let result = BoardService::new(&test.db)
        .create_board(1, CreateBoardDto::default())
        .await;
    assert!(matches!(result, Err(Error::ValidationError(_))));

    Ok(())
}

/// Expect only the caller's boards, last updated first
#[tokio::test]
async fn lists_own_boards() -> Result<(), TestError> {
    let test = board_test().await?;
    let roadmap = test.board().insert_board(1, "Roadmap").await?;
    test.board().insert_board(2, "Private").await?;
    let sprint = test.board().insert_board(1, "Sprint").await?;

    let board_service = BoardService::new(&test.db);
    board_service
        .update_board(
            1,
            roadmap.id,
            UpdateBoardDto {
                title: Some("Roadmap 2027".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let boards = board_service.list_boards(1).await.unwrap();

    let ids: Vec<i32> = boards.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![roadmap.id, sprint.id]);

    Ok(())
}

/// Expect columns in position order, each holding its own tasks in position order
#[tokio::test]
async fn nests_columns_and_tasks() -> Result<(), TestError> {
    let test = board_test().await?;
    let columns = board_with_columns(&test).await?;
    tasks_in(&test, columns[2], &["Shipped"]).await?;
    let todo = tasks_in(&test, columns[0], &["Plan", "Write"]).await?;
    test.board().assign_task(todo[1], Some(2)).await?;

    let board = BoardService::new(&test.db).get_board(1, 1).await.unwrap();

    let layout: Vec<(&str, Vec<&str>)> = board
        .columns
        .iter()
        .map(|c| {
            (
                c.title.as_str(),
                c.tasks.iter().map(|t| t.title.as_str()).collect(),
            )
        })
        .collect();
    assert_eq!(
        layout,
        vec![
            ("Todo", vec!["Plan", "Write"]),
            ("Doing", vec![]),
            ("Done", vec!["Shipped"]),
        ]
    );
    assert_eq!(
        board.columns[0].tasks[1]
            .assignee
            .as_ref()
            .map(|u| u.username.as_str()),
        Some("bob")
    );

    Ok(())
}

/// Expect BoardNotFound for a missing board and NotBoardOwner for another user's
#[tokio::test]
async fn rejects_inaccessible_board() -> Result<(), TestError> {
    let test = board_test().await?;
    board_with_columns(&test).await?;

    let board_service = BoardService::new(&test.db);

    let result = board_service.get_board(2, 1).await;
    assert!(matches!(
        result,
        Err(Error::BoardError(BoardError::NotBoardOwner(1)))
    ));

    let result = board_service.get_board(1, 99).await;
    assert!(matches!(
        result,
        Err(Error::BoardError(BoardError::BoardNotFound(99)))
    ));

    Ok(())
}
