use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::board::{ColumnDto, ColumnWithTasksDto, CreateColumnDto, ReorderDto, UpdateColumnDto},
    server::{
        data::board::{ColumnRepository, TaskRepository},
        error::{board::BoardError, Error},
        util::validation::Validator,
    },
};

use super::{
    check_order, column_with_tasks, insert_position, is_permutation, owned_board, owned_column,
    reposition, task::task_dto, TITLE_MAX,
};

pub struct ColumnService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ColumnService<'a> {
    /// Creates a new instance of [`ColumnService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a column to a board owned by the caller.
    ///
    /// Without an `order` the column is appended. With one, columns from that position on
    /// move one step right to make room.
    pub async fn create_column(
        &self,
        user_id: i32,
        board_id: i32,
        payload: CreateColumnDto,
    ) -> Result<ColumnDto, Error> {
        let title = payload.title.trim();

        let mut validator = Validator::new();
        validator.length("title", title, 1, TITLE_MAX);
        check_order(&mut validator, payload.order);
        validator.finish()?;

        let txn = self.db.begin().await?;

        owned_board(&txn, user_id, board_id).await?;

        let column_repo = ColumnRepository::new(&txn);
        let position = insert_position(payload.order, column_repo.count(board_id).await?);
        column_repo.shift(board_id, position, None, 1).await?;
        let column = column_repo.create(board_id, title, position).await?;

        txn.commit().await?;

        tracing::debug!(
            "User {} added column {} to board {} at {}",
            user_id,
            column.id,
            board_id,
            position
        );

        Ok(column.into())
    }

    /// Columns of a board owned by the caller, first to last
    pub async fn list_columns(&self, user_id: i32, board_id: i32) -> Result<Vec<ColumnDto>, Error> {
        owned_board(self.db, user_id, board_id).await?;

        let columns = ColumnRepository::new(self.db).list(board_id).await?;

        Ok(columns.into_iter().map(ColumnDto::from).collect())
    }

    /// Gets a column with its tasks in order
    pub async fn get_column(
        &self,
        user_id: i32,
        column_id: i32,
    ) -> Result<ColumnWithTasksDto, Error> {
        let column = owned_column(self.db, user_id, column_id).await?;

        let tasks = TaskRepository::new(self.db)
            .list_for_columns(&[column.id])
            .await?
            .into_iter()
            .map(|(task, assignee)| task_dto(task, assignee))
            .collect();

        Ok(column_with_tasks(column, tasks))
    }

    /// Renames and/or repositions a column.
    ///
    /// Moving a column shifts the columns it passes over by one step towards its old
    /// position. A target past the last column is clamped to the last position.
    ///
    /// # Returns
    /// - `Ok(ColumnDto)` - Column updated
    /// - `Err(Error::ValidationError)` - Title empty or too long, or a negative order
    /// - `Err(Error::BoardError(ColumnNotFound))` - No such column
    /// - `Err(Error::BoardError(NotBoardOwner))` - Column is on another user's board
    pub async fn update_column(
        &self,
        user_id: i32,
        column_id: i32,
        payload: UpdateColumnDto,
    ) -> Result<ColumnDto, Error> {
        let title = payload.title.as_deref().map(str::trim);

        let mut validator = Validator::new();
        if let Some(title) = title {
            validator.length("title", title, 1, TITLE_MAX);
        }
        check_order(&mut validator, payload.order);
        validator.finish()?;

        let txn = self.db.begin().await?;

        let column = owned_column(&txn, user_id, column_id).await?;
        let column_repo = ColumnRepository::new(&txn);

        let mut position = column.position;
        if let Some(order) = payload.order {
            let len = column_repo.count(column.board_id).await?;
            let (target, shift) = reposition(column.position, order, len);
            if let Some((from, to, delta)) = shift {
                column_repo
                    .shift(column.board_id, from, Some(to), delta)
                    .await?;
            }
            position = target;
        }

        let title = title.unwrap_or(&column.title).to_string();
        let column = column_repo.update(column, &title, position).await?;

        txn.commit().await?;

        Ok(column.into())
    }

    /// Deletes a column and its tasks, closing the gap it leaves
    pub async fn delete_column(&self, user_id: i32, column_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let column = owned_column(&txn, user_id, column_id).await?;
        let column_repo = ColumnRepository::new(&txn);
        column_repo.delete(column.id).await?;
        column_repo
            .shift(column.board_id, column.position + 1, None, -1)
            .await?;

        txn.commit().await?;

        tracing::debug!("User {} deleted column {}", user_id, column_id);

        Ok(())
    }

    /// Rewrites the order of every column of a board.
    ///
    /// `ordered_ids` must name each column of the board exactly once; the column at index
    /// `i` gets position `i`.
    pub async fn reorder_columns(
        &self,
        user_id: i32,
        board_id: i32,
        payload: ReorderDto,
    ) -> Result<Vec<ColumnDto>, Error> {
        let txn = self.db.begin().await?;

        owned_board(&txn, user_id, board_id).await?;

        let column_repo = ColumnRepository::new(&txn);
        let existing: Vec<i32> = column_repo
            .list(board_id)
            .await?
            .iter()
            .map(|column| column.id)
            .collect();
        if !is_permutation(&existing, &payload.ordered_ids) {
            return Err(BoardError::InvalidReorder("columns").into());
        }

        for (position, column_id) in (0..).zip(&payload.ordered_ids) {
            column_repo.set_position(*column_id, position).await?;
        }
        let columns = column_repo.list(board_id).await?;

        txn.commit().await?;

        Ok(columns.into_iter().map(ColumnDto::from).collect())
    }
}
