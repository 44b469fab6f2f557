//! Task boards with ordered columns and tasks.
//!
//! Boards are private to their owner. Column and task operations resolve the owning board
//! first, answering 404 for a missing record and 403 for another user's board. Positions
//! stay dense and zero-based per board for columns and per column for tasks; every
//! operation that moves more than one row runs in a transaction.

mod column;
mod task;

#[cfg(test)]
mod tests;

pub use column::ColumnService;
pub use task::TaskService;

use std::cmp::Ordering;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    model::board::{
        BoardDetailDto, BoardDto, ColumnWithTasksDto, CreateBoardDto, TaskDto, UpdateBoardDto,
    },
    server::{
        data::board::{BoardRepository, ColumnRepository, TaskRepository},
        error::{board::BoardError, Error},
        model::db::{BoardColumnModel, BoardModel},
        util::validation::Validator,
    },
};

const TITLE_MAX: usize = 100;
const DESCRIPTION_MAX: usize = 1000;

pub struct BoardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardService<'a> {
    /// Creates a new instance of [`BoardService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_board(
        &self,
        user_id: i32,
        payload: CreateBoardDto,
    ) -> Result<BoardDto, Error> {
        let title = payload.title.trim();
        let description = optional_text(payload.description);

        let mut validator = Validator::new();
        validator.length("title", title, 1, TITLE_MAX);
        if let Some(description) = &description {
            validator.length("description", description, 0, DESCRIPTION_MAX);
        }
        validator.finish()?;

        let board = BoardRepository::new(self.db)
            .create(user_id, title, description.as_deref())
            .await?;

        tracing::debug!("User {} created board {}", user_id, board.id);

        Ok(board.into())
    }

    /// Boards owned by the caller, most recently updated first
    pub async fn list_boards(&self, user_id: i32) -> Result<Vec<BoardDto>, Error> {
        let boards = BoardRepository::new(self.db).list_by_owner(user_id).await?;

        Ok(boards.into_iter().map(BoardDto::from).collect())
    }

    /// Gets a board with every column in order, each holding its tasks in order.
    ///
    /// # Returns
    /// - `Ok(BoardDetailDto)` - The board and its contents
    /// - `Err(Error::BoardError(BoardNotFound))` - No such board
    /// - `Err(Error::BoardError(NotBoardOwner))` - Board belongs to another user
    pub async fn get_board(&self, user_id: i32, board_id: i32) -> Result<BoardDetailDto, Error> {
        let board = owned_board(self.db, user_id, board_id).await?;
        let columns = ColumnRepository::new(self.db).list(board.id).await?;

        let column_ids: Vec<i32> = columns.iter().map(|column| column.id).collect();
        let mut tasks = TaskRepository::new(self.db)
            .list_for_columns(&column_ids)
            .await?
            .into_iter()
            .peekable();

        let mut column_dtos = Vec::with_capacity(columns.len());
        for column in columns {
            let mut column_tasks = Vec::new();
            while let Some((task, assignee)) =
                tasks.next_if(|(task, _)| task.column_id == column.id)
            {
                column_tasks.push(task::task_dto(task, assignee));
            }
            column_dtos.push(column_with_tasks(column, column_tasks));
        }

        Ok(BoardDetailDto {
            id: board.id,
            title: board.title,
            description: board.description,
            owner_id: board.owner_id,
            created_at: board.created_at,
            updated_at: board.updated_at,
            columns: column_dtos,
        })
    }

    /// Changes the title and/or description of a board owned by the caller
    pub async fn update_board(
        &self,
        user_id: i32,
        board_id: i32,
        payload: UpdateBoardDto,
    ) -> Result<BoardDto, Error> {
        let board = owned_board(self.db, user_id, board_id).await?;

        let title = payload
            .title
            .as_deref()
            .map(str::trim)
            .unwrap_or(&board.title)
            .to_string();
        let description = match payload.description {
            Some(description) => optional_text(description),
            None => board.description.clone(),
        };

        let mut validator = Validator::new();
        validator.length("title", &title, 1, TITLE_MAX);
        if let Some(description) = &description {
            validator.length("description", description, 0, DESCRIPTION_MAX);
        }
        validator.finish()?;

        let board = BoardRepository::new(self.db)
            .update(board, &title, description.as_deref())
            .await?;

        Ok(board.into())
    }

    /// Deletes a board owned by the caller together with its columns and tasks
    pub async fn delete_board(&self, user_id: i32, board_id: i32) -> Result<(), Error> {
        owned_board(self.db, user_id, board_id).await?;

        BoardRepository::new(self.db).delete(board_id).await?;

        tracing::debug!("User {} deleted board {}", user_id, board_id);

        Ok(())
    }
}

/// Gets a board, failing unless `user_id` owns it
async fn owned_board<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    board_id: i32,
) -> Result<BoardModel, Error> {
    let board = BoardRepository::new(db)
        .get(board_id)
        .await?
        .ok_or(BoardError::BoardNotFound(board_id))?;

    if board.owner_id != user_id {
        return Err(BoardError::NotBoardOwner(board_id).into());
    }

    Ok(board)
}

/// Gets a column, failing unless `user_id` owns its board
async fn owned_column<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    column_id: i32,
) -> Result<BoardColumnModel, Error> {
    let column = ColumnRepository::new(db)
        .get(column_id)
        .await?
        .ok_or(BoardError::ColumnNotFound(column_id))?;

    owned_board(db, user_id, column.board_id).await?;

    Ok(column)
}

fn column_with_tasks(
    column: BoardColumnModel,
    tasks: Vec<TaskDto>,
) -> ColumnWithTasksDto {
    ColumnWithTasksDto {
        id: column.id,
        board_id: column.board_id,
        title: column.title,
        order: column.position,
        tasks,
    }
}

/// Trims optional free text, treating blank as absent
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn check_order(validator: &mut Validator, order: Option<i32>) {
    validator.check(
        !matches!(order, Some(order) if order < 0),
        "order",
        "Must not be negative",
    );
}

/// Position an item inserted among `len` siblings lands on.
///
/// A requested position past the end is clamped to the end, no request appends.
fn insert_position(requested: Option<i32>, len: u64) -> i32 {
    let end = i32::try_from(len).unwrap_or(i32::MAX);
    requested.map_or(end, |position| position.min(end))
}

/// Target position and the sibling shift `(from, to, delta)` that moving an item from
/// `current` to `requested` among `len` siblings needs.
fn reposition(current: i32, requested: i32, len: u64) -> (i32, Option<(i32, i32, i32)>) {
    let last = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
    let target = requested.min(last);

    let shift = match target.cmp(&current) {
        Ordering::Greater => Some((current + 1, target, -1)),
        Ordering::Less => Some((target, current - 1, 1)),
        Ordering::Equal => None,
    };

    (target, shift)
}

/// Whether `ordered` lists every ID of `existing` exactly once
fn is_permutation(existing: &[i32], ordered: &[i32]) -> bool {
    let mut existing = existing.to_vec();
    let mut ordered = ordered.to_vec();
    existing.sort_unstable();
    ordered.sort_unstable();

    existing == ordered
}
