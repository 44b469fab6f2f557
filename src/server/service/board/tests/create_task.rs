use chrono::NaiveDate;

use crate::model::board::CreateTaskDto;

use super::*;

fn task(title: &str, order: Option<i32>) -> CreateTaskDto {
    CreateTaskDto {
        title: title.to_string(),
        order,
        ..Default::default()
    }
}

/// Expect every field stored and the assignee resolved
#[tokio::test]
async fn creates_task() -> Result<(), TestError> {
    let test = board_test().await?;
    let columns = board_with_columns(&test).await?;
    let due = NaiveDate::from_ymd_opt(2026, 11, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .unwrap();

    let created = TaskService::new(&test.db)
        .create_task(
            1,
            columns[0],
            CreateTaskDto {
                title: " Write docs ".to_string(),
                description: Some("Cover every route".to_string()),
                priority: Some("high".to_string()),
                status: Some("".to_string()),
                due_date: Some(due),
                assignee_id: Some(2),
                order: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(created.title, "Write docs");
    assert_eq!(created.priority.as_deref(), Some("high"));
    assert_eq!(created.status, None);
    assert_eq!(created.due_date, Some(due));
    assert_eq!(created.order, 0);
    assert_eq!(created.created_by, 1);
    assert_eq!(created.assignee.map(|u| u.username), Some("bob".to_string()));

    Ok(())
}

/// Expect inserts at a position to push later tasks down and appends to go last
#[tokio::test]
async fn inserts_at_position() -> Result<(), TestError> {
    let test = board_test().await?;
    let columns = board_with_columns(&test).await?;
    tasks_in(&test, columns[0], &["Plan", "Ship"]).await?;

    let task_service = TaskService::new(&test.db);
    task_service
        .create_task(1, columns[0], task("Build", Some(1)))
        .await
        .unwrap();
    task_service
        .create_task(1, columns[0], task("Celebrate", None))
        .await
        .unwrap();

    assert_eq!(
        test.board().task_positions(columns[0]).await?,
        vec![
            ("Plan".to_string(), 0),
            ("Build".to_string(), 1),
            ("Ship".to_string(), 2),
            ("Celebrate".to_string(), 3),
        ]
    );

    Ok(())
}

/// Expect AssigneeNotFound for an unknown user and validation errors for bad fields
#[tokio::test]
async fn rejects_invalid_task() -> Result<(), TestError> {
    let test = board_test().await?;
    let columns = board_with_columns(&test).await?;

    let task_service = TaskService::new(&test.db);

    let result = task_service
        .create_task(
            1,
            columns[0],
            CreateTaskDto {
                title: "Orphan".to_string(),
                assignee_id: Some(42),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        result,
        Err(Error::BoardError(BoardError::AssigneeNotFound(42)))
    ));

    for payload in [
        task("", None),
        task("Negative", Some(-3)),
        CreateTaskDto {
            title: "Loud".to_string(),
            priority: Some("p".repeat(31)),
            ..Default::default()
        },
    ] {
        let result = task_service.create_task(1, columns[0], payload).await;
        assert!(matches!(result, Err(Error::ValidationError(_))));
    }

    assert!(test.board().task_positions(columns[0]).await?.is_empty());

    Ok(())
}

/// Expect other users to be refused and missing columns to be reported
#[tokio::test]
async fn rejects_inaccessible_column() -> Result<(), TestError> {
    let test = board_test().await?;
    let columns = board_with_columns(&test).await?;

    let task_service = TaskService::new(&test.db);

    let result = task_service
        .create_task(2, columns[0], task("Sneaky", None))
        .await;
    assert!(matches!(
        result,
        Err(Error::BoardError(BoardError::NotBoardOwner(1)))
    ));

    let result = task_service.create_task(1, 99, task("Lost", None)).await;
    assert!(matches!(
        result,
        Err(Error::BoardError(BoardError::ColumnNotFound(99)))
    ));

    Ok(())
}
