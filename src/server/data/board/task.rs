use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

type TaskWithAssignee = (
    entity::board_task::Model,
    Option<entity::bubble_user::Model>,
);

/// Fields of a task about to be inserted
pub struct NewTask {
    pub column_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub due_date: Option<NaiveDateTime>,
    pub position: i32,
    pub assignee_id: Option<i32>,
    pub created_by: i32,
}

/// Fields to overwrite on a task, `None` leaves a field as it is
#[derive(Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub priority: Option<Option<String>>,
    pub status: Option<Option<String>>,
    pub due_date: Option<Option<NaiveDateTime>>,
    pub assignee_id: Option<Option<i32>>,
    pub column_id: Option<i32>,
    pub position: Option<i32>,
}

pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    /// Creates a new instance of [`TaskRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, task: NewTask) -> Result<entity::board_task::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let task = entity::board_task::ActiveModel {
            column_id: ActiveValue::Set(task.column_id),
            title: ActiveValue::Set(task.title),
            description: ActiveValue::Set(task.description),
            priority: ActiveValue::Set(task.priority),
            status: ActiveValue::Set(task.status),
            due_date: ActiveValue::Set(task.due_date),
            position: ActiveValue::Set(task.position),
            assignee_id: ActiveValue::Set(task.assignee_id),
            created_by: ActiveValue::Set(task.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        task.insert(self.db).await
    }

    /// Gets a task with its assignee
    pub async fn get(&self, task_id: i32) -> Result<Option<TaskWithAssignee>, DbErr> {
        entity::prelude::BoardTask::find_by_id(task_id)
            .find_also_related(entity::bubble_user::Entity)
            .one(self.db)
            .await
    }

    /// Tasks of the given columns with their assignees, ordered by column then position
    pub async fn list_for_columns(
        &self,
        column_ids: &[i32],
    ) -> Result<Vec<TaskWithAssignee>, DbErr> {
        if column_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BoardTask::find()
            .filter(entity::board_task::Column::ColumnId.is_in(column_ids.iter().copied()))
            .order_by_asc(entity::board_task::Column::ColumnId)
            .order_by_asc(entity::board_task::Column::Position)
            .order_by_asc(entity::board_task::Column::Id)
            .find_also_related(entity::bubble_user::Entity)
            .all(self.db)
            .await
    }

    pub async fn count(&self, column_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BoardTask::find()
            .filter(entity::board_task::Column::ColumnId.eq(column_id))
            .count(self.db)
            .await
    }

    /// Adds `delta` to the position of every task of the column positioned in `from..=to`
    ///
    /// An open `to` shifts everything from `from` to the end of the column.
    pub async fn shift(
        &self,
        column_id: i32,
        from: i32,
        to: Option<i32>,
        delta: i32,
    ) -> Result<(), DbErr> {
        let mut query = entity::prelude::BoardTask::update_many()
            .col_expr(
                entity::board_task::Column::Position,
                Expr::col(entity::board_task::Column::Position).add(delta),
            )
            .filter(entity::board_task::Column::ColumnId.eq(column_id))
            .filter(entity::board_task::Column::Position.gte(from));
        if let Some(to) = to {
            query = query.filter(entity::board_task::Column::Position.lte(to));
        }

        query.exec(self.db).await?;

        Ok(())
    }

    pub async fn update(
        &self,
        task: entity::board_task::Model,
        changes: TaskChanges,
    ) -> Result<entity::board_task::Model, DbErr> {
        let mut task_am = task.into_active_model();
        if let Some(title) = changes.title {
            task_am.title = ActiveValue::Set(title);
        }
        if let Some(description) = changes.description {
            task_am.description = ActiveValue::Set(description);
        }
        if let Some(priority) = changes.priority {
            task_am.priority = ActiveValue::Set(priority);
        }
        if let Some(status) = changes.status {
            task_am.status = ActiveValue::Set(status);
        }
        if let Some(due_date) = changes.due_date {
            task_am.due_date = ActiveValue::Set(due_date);
        }
        if let Some(assignee_id) = changes.assignee_id {
            task_am.assignee_id = ActiveValue::Set(assignee_id);
        }
        if let Some(column_id) = changes.column_id {
            task_am.column_id = ActiveValue::Set(column_id);
        }
        if let Some(position) = changes.position {
            task_am.position = ActiveValue::Set(position);
        }
        task_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        task_am.update(self.db).await
    }

    pub async fn set_position(&self, task_id: i32, position: i32) -> Result<(), DbErr> {
        entity::prelude::BoardTask::update_many()
            .col_expr(entity::board_task::Column::Position, Expr::value(position))
            .filter(entity::board_task::Column::Id.eq(task_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete(&self, task_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BoardTask::delete_by_id(task_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod list_for_columns {
        use bubble_test_utils::prelude::*;

        use crate::server::data::board::TaskRepository;

        /// Expect tasks grouped by column in position order with assignees attached
        #[tokio::test]
        async fn orders_by_column_and_position() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_board_tables()
                .with_user("alice")
                .with_user("bob")
                .build()
                .await?;
            let board = test.board().insert_board(1, "Roadmap").await?;
            let todo = test.board().insert_column(board.id, "Todo", 0).await?;
            let done = test.board().insert_column(board.id, "Done", 1).await?;
            let second = test.board().insert_task(todo.id, 1, "Second", 1).await?;
            let shipped = test.board().insert_task(done.id, 1, "Shipped", 0).await?;
            let first = test.board().insert_task(todo.id, 1, "First", 0).await?;
            test.board().assign_task(first.id, Some(2)).await?;

            let task_repo = TaskRepository::new(&test.db);
            let tasks = task_repo.list_for_columns(&[todo.id, done.id]).await?;

            let ids: Vec<i32> = tasks.iter().map(|(t, _)| t.id).collect();
            assert_eq!(ids, vec![first.id, second.id, shipped.id]);
            assert_eq!(
                tasks[0].1.as_ref().map(|u| u.username.as_str()),
                Some("bob")
            );
            assert!(tasks[1].1.is_none());
            assert!(task_repo.list_for_columns(&[]).await?.is_empty());

            Ok(())
        }
    }

    mod update {
        use bubble_test_utils::prelude::*;

        use crate::server::data::board::{TaskChanges, TaskRepository};

        /// Expect only the given fields to change and explicit clears to null them
        #[tokio::test]
        async fn applies_partial_changes() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_board_tables()
                .with_user("alice")
                .build()
                .await?;
            let board = test.board().insert_board(1, "Roadmap").await?;
            let column = test.board().insert_column(board.id, "Todo", 0).await?;
            let task = test.board().insert_task(column.id, 1, "Write", 0).await?;
            let task = test.board().assign_task(task.id, Some(1)).await?;

            let updated = TaskRepository::new(&test.db)
                .update(
                    task,
                    TaskChanges {
                        status: Some(Some("blocked".to_string())),
                        assignee_id: Some(None),
                        ..Default::default()
                    },
                )
                .await?;

            assert_eq!(updated.title, "Write");
            assert_eq!(updated.status.as_deref(), Some("blocked"));
            assert_eq!(updated.assignee_id, None);

            Ok(())
        }
    }
}
