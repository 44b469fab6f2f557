use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn board(&self) -> BoardFixtures<'_> {
        BoardFixtures { test: self }
    }
}

pub struct BoardFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> BoardFixtures<'a> {
    /// Inserts a board without a description.
    pub async fn insert_board(
        &self,
        owner_id: i32,
        title: &str,
    ) -> Result<entity::board::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(entity::prelude::Board::insert(entity::board::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            title: ActiveValue::Set(title.to_string()),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Inserts a column at `position` without shifting its neighbours.
    pub async fn insert_column(
        &self,
        board_id: i32,
        title: &str,
        position: i32,
    ) -> Result<entity::board_column::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::BoardColumn::insert(entity::board_column::ActiveModel {
                board_id: ActiveValue::Set(board_id),
                title: ActiveValue::Set(title.to_string()),
                position: ActiveValue::Set(position),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Inserts an unassigned task at `position` without shifting its neighbours.
    pub async fn insert_task(
        &self,
        column_id: i32,
        created_by: i32,
        title: &str,
        position: i32,
    ) -> Result<entity::board_task::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::BoardTask::insert(entity::board_task::ActiveModel {
                column_id: ActiveValue::Set(column_id),
                title: ActiveValue::Set(title.to_string()),
                description: ActiveValue::Set(None),
                priority: ActiveValue::Set(None),
                status: ActiveValue::Set(None),
                due_date: ActiveValue::Set(None),
                position: ActiveValue::Set(position),
                assignee_id: ActiveValue::Set(None),
                created_by: ActiveValue::Set(created_by),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn assign_task(
        &self,
        task_id: i32,
        assignee_id: Option<i32>,
    ) -> Result<entity::board_task::Model, TestError> {
        let task = entity::prelude::BoardTask::find_by_id(task_id)
            .one(&self.test.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("board_task {}", task_id)))?;

        let mut task_am = task.into_active_model();
        task_am.assignee_id = ActiveValue::Set(assignee_id);

        Ok(task_am.update(&self.test.db).await?)
    }

    /// Titles of a board's columns from first to last.
    pub async fn column_titles(&self, board_id: i32) -> Result<Vec<String>, TestError> {
        Ok(entity::prelude::BoardColumn::find()
            .filter(entity::board_column::Column::BoardId.eq(board_id))
            .order_by_asc(entity::board_column::Column::Position)
            .all(&self.test.db)
            .await?
            .into_iter()
            .map(|column| column.title)
            .collect())
    }

    /// `(title, position)` of a column's tasks from first to last.
    pub async fn task_positions(&self, column_id: i32) -> Result<Vec<(String, i32)>, TestError> {
        Ok(entity::prelude::BoardTask::find()
            .filter(entity::board_task::Column::ColumnId.eq(column_id))
            .order_by_asc(entity::board_task::Column::Position)
            .all(&self.test.db)
            .await?
            .into_iter()
            .map(|task| (task.title, task.position))
            .collect())
    }
}
