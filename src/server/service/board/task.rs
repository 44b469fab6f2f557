use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::board::{CreateTaskDto, MoveTaskDto, ReorderDto, TaskDto, UpdateTaskDto},
    server::{
        data::{
            board::{NewTask, TaskChanges, TaskRepository},
            user::UserRepository,
        },
        error::{board::BoardError, validation::ValidationError, Error},
        model::db::{BoardTaskModel, UserModel},
        util::validation::Validator,
    },
};

use super::{
    check_order, insert_position, is_permutation, optional_text, owned_column, reposition,
    DESCRIPTION_MAX, TITLE_MAX,
};

const LABEL_MAX: usize = 30;

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    /// Creates a new instance of [`TaskService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a task to a column on a board owned by the caller.
    ///
    /// Without an `order` the task is appended. With one, tasks from that position on
    /// move one step down to make room.
    ///
    /// # Returns
    /// - `Ok(TaskDto)` - Task created
    /// - `Err(Error::ValidationError)` - A field broke its rule
    /// - `Err(Error::BoardError(ColumnNotFound | NotBoardOwner))` - Column not accessible
    /// - `Err(Error::BoardError(AssigneeNotFound))` - `assigneeId` names no user
    pub async fn create_task(
        &self,
        user_id: i32,
        column_id: i32,
        payload: CreateTaskDto,
    ) -> Result<TaskDto, Error> {
        let title = payload.title.trim().to_string();
        let description = optional_text(payload.description);
        let priority = optional_text(payload.priority);
        let status = optional_text(payload.status);

        let mut validator = Validator::new();
        validator.length("title", &title, 1, TITLE_MAX);
        check_text(&mut validator, "description", description.as_deref(), DESCRIPTION_MAX);
        check_text(&mut validator, "priority", priority.as_deref(), LABEL_MAX);
        check_text(&mut validator, "status", status.as_deref(), LABEL_MAX);
        check_order(&mut validator, payload.order);
        validator.finish()?;

        let txn = self.db.begin().await?;

        owned_column(&txn, user_id, column_id).await?;
        let assignee = match payload.assignee_id {
            Some(assignee_id) => Some(existing_user(&txn, assignee_id).await?),
            None => None,
        };

        let task_repo = TaskRepository::new(&txn);
        let position = insert_position(payload.order, task_repo.count(column_id).await?);
        task_repo.shift(column_id, position, None, 1).await?;
        let task = task_repo
            .create(NewTask {
                column_id,
                title,
                description,
                priority,
                status,
                due_date: payload.due_date,
                position,
                assignee_id: assignee.as_ref().map(|user| user.id),
                created_by: user_id,
            })
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "User {} added task {} to column {} at {}",
            user_id,
            task.id,
            column_id,
            position
        );

        Ok(task_dto(task, assignee))
    }

    /// Tasks of a column, first to last
    pub async fn list_tasks(&self, user_id: i32, column_id: i32) -> Result<Vec<TaskDto>, Error> {
        owned_column(self.db, user_id, column_id).await?;

        let tasks = TaskRepository::new(self.db)
            .list_for_columns(&[column_id])
            .await?;

        Ok(tasks
            .into_iter()
            .map(|(task, assignee)| task_dto(task, assignee))
            .collect())
    }

    pub async fn get_task(&self, user_id: i32, task_id: i32) -> Result<TaskDto, Error> {
        let (task, assignee) = owned_task(self.db, user_id, task_id).await?;

        Ok(task_dto(task, assignee))
    }

    /// Edits a task.
    ///
    /// Omitted fields stay as they are and `null` clears an optional one. A new `order`
    /// repositions the task inside its column. A different `columnId` moves the task like
    /// [`TaskService::move_task`], landing at `order` or at the end.
    pub async fn update_task(
        &self,
        user_id: i32,
        task_id: i32,
        payload: UpdateTaskDto,
    ) -> Result<TaskDto, Error> {
        let title = payload.title.map(|title| title.trim().to_string());
        let description = payload.description.map(optional_text);
        let priority = payload.priority.map(optional_text);
        let status = payload.status.map(optional_text);

        let mut validator = Validator::new();
        if let Some(title) = &title {
            validator.length("title", title, 1, TITLE_MAX);
        }
        check_text(
            &mut validator,
            "description",
            description.as_ref().and_then(Option::as_deref),
            DESCRIPTION_MAX,
        );
        check_text(
            &mut validator,
            "priority",
            priority.as_ref().and_then(Option::as_deref),
            LABEL_MAX,
        );
        check_text(
            &mut validator,
            "status",
            status.as_ref().and_then(Option::as_deref),
            LABEL_MAX,
        );
        check_order(&mut validator, payload.order);
        validator.finish()?;

        let txn = self.db.begin().await?;

        let (task, mut assignee) = owned_task(&txn, user_id, task_id).await?;
        if let Some(assignee_id) = payload.assignee_id {
            assignee = match assignee_id {
                Some(assignee_id) => Some(existing_user(&txn, assignee_id).await?),
                None => None,
            };
        }

        let mut changes = TaskChanges {
            title,
            description,
            priority,
            status,
            due_date: payload.due_date,
            assignee_id: payload.assignee_id,
            ..Default::default()
        };

        match payload.column_id {
            Some(target_id) if target_id != task.column_id => {
                owned_column(&txn, user_id, target_id).await?;
                changes.position = Some(relocate(&txn, &task, target_id, payload.order).await?);
                changes.column_id = Some(target_id);
            }
            _ => {
                if let Some(order) = payload.order {
                    changes.position = Some(reorder_within(&txn, &task, order).await?);
                }
            }
        }

        let task = TaskRepository::new(&txn).update(task, changes).await?;

        txn.commit().await?;

        Ok(task_dto(task, assignee))
    }

    /// Deletes a task, closing the gap it leaves in its column
    pub async fn delete_task(&self, user_id: i32, task_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let (task, _) = owned_task(&txn, user_id, task_id).await?;
        let task_repo = TaskRepository::new(&txn);
        task_repo.delete(task.id).await?;
        task_repo
            .shift(task.column_id, task.position + 1, None, -1)
            .await?;

        txn.commit().await?;

        tracing::debug!("User {} deleted task {}", user_id, task_id);

        Ok(())
    }

    /// Rewrites the order of every task of a column.
    ///
    /// `ordered_ids` must name each task of the column exactly once; the task at index `i`
    /// gets position `i`.
    pub async fn reorder_tasks(
        &self,
        user_id: i32,
        column_id: i32,
        payload: ReorderDto,
    ) -> Result<Vec<TaskDto>, Error> {
        let txn = self.db.begin().await?;

        owned_column(&txn, user_id, column_id).await?;

        let task_repo = TaskRepository::new(&txn);
        let existing: Vec<i32> = task_repo
            .list_for_columns(&[column_id])
            .await?
            .iter()
            .map(|(task, _)| task.id)
            .collect();
        if !is_permutation(&existing, &payload.ordered_ids) {
            return Err(BoardError::InvalidReorder("tasks").into());
        }

        for (position, task_id) in (0..).zip(&payload.ordered_ids) {
            task_repo.set_position(*task_id, position).await?;
        }
        let tasks = task_repo.list_for_columns(&[column_id]).await?;

        txn.commit().await?;

        Ok(tasks
            .into_iter()
            .map(|(task, assignee)| task_dto(task, assignee))
            .collect())
    }

    /// Moves a task into another column.
    ///
    /// The gap in the source column closes and the task lands at `order` in the target
    /// column, or at its end. Both columns must be on boards the caller owns.
    ///
    /// # Returns
    /// - `Ok(TaskDto)` - Task moved
    /// - `Err(Error::ValidationError)` - `columnId` missing or a negative order
    /// - `Err(Error::BoardError(SameColumn))` - Task already is in the target column
    /// - `Err(Error::BoardError(TaskNotFound | ColumnNotFound | NotBoardOwner))` - Not accessible
    pub async fn move_task(
        &self,
        user_id: i32,
        task_id: i32,
        payload: MoveTaskDto,
    ) -> Result<TaskDto, Error> {
        let target_id = payload
            .column_id
            .ok_or_else(|| ValidationError::field("columnId", "Column ID is required"))?;
        let mut validator = Validator::new();
        check_order(&mut validator, payload.order);
        validator.finish()?;

        let txn = self.db.begin().await?;

        let (task, assignee) = owned_task(&txn, user_id, task_id).await?;
        if task.column_id == target_id {
            return Err(BoardError::SameColumn {
                task_id,
                column_id: target_id,
            }
            .into());
        }
        owned_column(&txn, user_id, target_id).await?;

        let position = relocate(&txn, &task, target_id, payload.order).await?;
        let task = TaskRepository::new(&txn)
            .update(
                task,
                TaskChanges {
                    column_id: Some(target_id),
                    position: Some(position),
                    ..Default::default()
                },
            )
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "User {} moved task {} to column {} at {}",
            user_id,
            task_id,
            target_id,
            position
        );

        Ok(task_dto(task, assignee))
    }
}

/// Gets a task with its assignee, failing unless `user_id` owns its board
async fn owned_task<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    task_id: i32,
) -> Result<(BoardTaskModel, Option<UserModel>), Error> {
    let (task, assignee) = TaskRepository::new(db)
        .get(task_id)
        .await?
        .ok_or(BoardError::TaskNotFound(task_id))?;

    owned_column(db, user_id, task.column_id).await?;

    Ok((task, assignee))
}

async fn existing_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<UserModel, Error> {
    UserRepository::new(db)
        .get(user_id)
        .await?
        .ok_or_else(|| BoardError::AssigneeNotFound(user_id).into())
}

/// Closes the task's gap in its column and opens one in `target_id`, returning the new position
async fn relocate<C: ConnectionTrait>(
    db: &C,
    task: &BoardTaskModel,
    target_id: i32,
    requested: Option<i32>,
) -> Result<i32, Error> {
    let task_repo = TaskRepository::new(db);
    task_repo
        .shift(task.column_id, task.position + 1, None, -1)
        .await?;

    let position = insert_position(requested, task_repo.count(target_id).await?);
    task_repo.shift(target_id, position, None, 1).await?;

    Ok(position)
}

/// Shifts the tasks between the task's position and `requested`, returning the new position
async fn reorder_within<C: ConnectionTrait>(
    db: &C,
    task: &BoardTaskModel,
    requested: i32,
) -> Result<i32, Error> {
    let task_repo = TaskRepository::new(db);
    let len = task_repo.count(task.column_id).await?;

    let (target, shift) = reposition(task.position, requested, len);
    if let Some((from, to, delta)) = shift {
        task_repo.shift(task.column_id, from, Some(to), delta).await?;
    }

    Ok(target)
}

fn check_text(validator: &mut Validator, field: &str, value: Option<&str>, max: usize) {
    if let Some(value) = value {
        validator.length(field, value, 0, max);
    }
}

pub(super) fn task_dto(task: BoardTaskModel, assignee: Option<UserModel>) -> TaskDto {
    TaskDto {
        id: task.id,
        column_id: task.column_id,
        title: task.title,
        description: task.description,
        priority: task.priority,
        status: task.status,
        due_date: task.due_date,
        order: task.position,
        assignee: assignee.map(Into::into),
        created_by: task.created_by,
        created_at: task.created_at,
        updated_at: task.updated_at,
    }
}
