//! Task boards, their ordered columns and the ordered tasks inside each column.
//!
//! Columns and tasks carry a zero-based `position` that is kept dense per parent. The
//! repositories only move rows; callers run every multi-step reposition inside a
//! transaction.

pub mod column;
pub mod task;

pub use column::ColumnRepository;
pub use task::{NewTask, TaskChanges, TaskRepository};

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

pub struct BoardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BoardRepository<'a, C> {
    /// Creates a new instance of [`BoardRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: i32,
        title: &str,
        description: Option<&str>,
    ) -> Result<entity::board::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let board = entity::board::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(description.map(str::to_string)),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        board.insert(self.db).await
    }

    pub async fn get(&self, board_id: i32) -> Result<Option<entity::board::Model>, DbErr> {
        entity::prelude::Board::find_by_id(board_id)
            .one(self.db)
            .await
    }

    /// Boards owned by a user, most recently updated first
    pub async fn list_by_owner(&self, owner_id: i32) -> Result<Vec<entity::board::Model>, DbErr> {
        entity::prelude::Board::find()
            .filter(entity::board::Column::OwnerId.eq(owner_id))
            .order_by_desc(entity::board::Column::UpdatedAt)
            .order_by_desc(entity::board::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        board: entity::board::Model,
        title: &str,
        description: Option<&str>,
    ) -> Result<entity::board::Model, DbErr> {
        let mut board_am = board.into_active_model();
        board_am.title = ActiveValue::Set(title.to_string());
        board_am.description = ActiveValue::Set(description.map(str::to_string));
        board_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        board_am.update(self.db).await
    }

    /// Deletes a board, its columns and tasks go with it through cascading foreign keys
    pub async fn delete(&self, board_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Board::delete_by_id(board_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod list_by_owner {
        use bubble_test_utils::prelude::*;

        use crate::server::data::board::BoardRepository;

        /// Expect only the owner's boards, most recently updated first
        #[tokio::test]
        async fn lists_recent_first() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_board_tables()
                .with_user("alice")
                .with_user("bob")
                .build()
                .await?;
            let older = test.board().insert_board(1, "Roadmap").await?;
            test.board().insert_board(2, "Hidden").await?;
            let newer = test.board().insert_board(1, "Sprint").await?;

            let board_repo = BoardRepository::new(&test.db);
            let boards = board_repo.list_by_owner(1).await?;

            let ids: Vec<i32> = boards.iter().map(|b| b.id).collect();
            assert_eq!(ids, vec![newer.id, older.id]);

            Ok(())
        }
    }

    mod delete {
        use bubble_test_utils::prelude::*;
        use sea_orm::EntityTrait;

        use crate::server::data::board::BoardRepository;

        /// Expect columns and tasks to be removed along with the board
        #[tokio::test]
        async fn cascades_to_columns_and_tasks() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_board_tables()
                .with_user("alice")
                .build()
                .await?;
            let board = test.board().insert_board(1, "Roadmap").await?;
            let column = test.board().insert_column(board.id, "Todo", 0).await?;
            test.board().insert_task(column.id, 1, "Write", 0).await?;

            BoardRepository::new(&test.db).delete(board.id).await?;

            assert!(entity::prelude::BoardColumn::find()
                .all(&test.db)
                .await?
                .is_empty());
            assert!(entity::prelude::BoardTask::find()
                .all(&test.db)
                .await?
                .is_empty());

            Ok(())
        }
    }
}
