use crate::model::board::ReorderDto;

use super::*;

/// Expect every column to take the index of its ID in the list
#[tokio::test]
async fn applies_full_order() -> Result<(), TestError> {
    let test = board_test().await?;
    let columns = board_with_columns(&test).await?;

    let reordered = ColumnService::new(&test.db)
        .reorder_columns(
            1,
            1,
            ReorderDto {
                ordered_ids: vec![columns[2], columns[0], columns[1]],
            },
        )
        .await
        .unwrap();

    let layout: Vec<(&str, i32)> = reordered
        .iter()
        .map(|c| (c.title.as_str(), c.order))
        .collect();
    assert_eq!(layout, vec![("Done", 0), ("Todo", 1), ("Doing", 2)]);

    Ok(())
}

/// Expect InvalidReorder and an untouched board for partial, duplicated or foreign IDs
#[tokio::test]
async fn rejects_mismatched_ids() -> Result<(), TestError> {
    let test = board_test().await?;
    let columns = board_with_columns(&test).await?;
    let other = test.board().insert_board(1, "Other").await?;
    let foreign = test.board().insert_column(other.id, "Foreign", 0).await?;

    let column_service = ColumnService::new(&test.db);

    for ordered_ids in [
        vec![columns[1], columns[0]],
        vec![columns[0], columns[0], columns[1], columns[2]],
        vec![columns[0], columns[1], foreign.id],
    ] {
        let result = column_service
            .reorder_columns(1, 1, ReorderDto { ordered_ids })
            .await;
        assert!(matches!(
            result,
            Err(Error::BoardError(BoardError::InvalidReorder(_)))
        ));
    }
    assert_eq!(test.board().column_titles(1).await?, ["Todo", "Doing", "Done"]);

    Ok(())
}
