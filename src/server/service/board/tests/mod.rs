mod create_task;
mod get_board;
mod reorder_columns;

use bubble_test_utils::prelude::*;

use crate::server::{
    error::{board::BoardError, Error},
    service::board::{BoardService, ColumnService, TaskService},
};

/// Board 1 owned by user 1 with columns "Todo", "Doing", "Done" at positions 0..=2
async fn board_with_columns(test: &TestContext) -> Result<Vec<i32>, TestError> {
    let board = test.board().insert_board(1, "Roadmap").await?;

    let mut column_ids = Vec::new();
    for (position, title) in (0..).zip(["Todo", "Doing", "Done"]) {
        column_ids.push(test.board().insert_column(board.id, title, position).await?.id);
    }

    Ok(column_ids)
}

/// Inserts tasks with the given titles into a column at positions 0, 1, 2, ...
async fn tasks_in(test: &TestContext, column_id: i32, titles: &[&str]) -> Result<Vec<i32>, TestError> {
    let mut task_ids = Vec::new();
    for (position, title) in (0..).zip(titles) {
        task_ids.push(
            test.board()
                .insert_task(column_id, 1, title, position)
                .await?
                .id,
        );
    }

    Ok(task_ids)
}

async fn board_test() -> Result<TestContext, TestError> {
    TestBuilder::new()
        .with_board_tables()
        .with_user("alice")
        .with_user("bob")
        .build()
        .await
}

fn titles(positions: Vec<(String, i32)>) -> Vec<String> {
    positions.into_iter().map(|(title, _)| title).collect()
}
