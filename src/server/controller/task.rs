use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        board::{CreateTaskDto, MoveTaskDto, ReorderDto, TaskDto, UpdateTaskDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::board::TaskService,
    },
};

pub static TASK_TAG: &str = "task";

/// Add a task to a column, appended unless `order` says where
#[utoipa::path(
    post,
    path = "/api/columns/{column_id}/tasks",
    tag = TASK_TAG,
    security(("bearerAuth" = [])),
    params(("column_id" = i32, Path, description = "Column ID")),
    request_body = CreateTaskDto,
    responses(
        (status = 201, description = "Task created", body = TaskDto),
        (status = 400, description = "A field is invalid or the assignee does not exist", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Column is on another user's board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(column_id): Path<i32>,
    Json(payload): Json<CreateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskService::new(&state.db)
        .create_task(auth.id, column_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

#[utoipa::path(
    get,
    path = "/api/columns/{column_id}/tasks",
    tag = TASK_TAG,
    security(("bearerAuth" = [])),
    params(("column_id" = i32, Path, description = "Column ID")),
    responses(
        (status = 200, description = "Tasks first to last", body = Vec<TaskDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Column is on another user's board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(column_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let tasks = TaskService::new(&state.db)
        .list_tasks(auth.id, column_id)
        .await?;

    Ok(Json(tasks))
}

/// Set the order of every task of a column at once
#[utoipa::path(
    put,
    path = "/api/columns/{column_id}/tasks/reorder",
    tag = TASK_TAG,
    security(("bearerAuth" = [])),
    params(("column_id" = i32, Path, description = "Column ID")),
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Tasks in their new order", body = Vec<TaskDto>),
        (status = 400, description = "IDs do not list every task exactly once", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Column is on another user's board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(column_id): Path<i32>,
    Json(payload): Json<ReorderDto>,
) -> Result<impl IntoResponse, Error> {
    let tasks = TaskService::new(&state.db)
        .reorder_tasks(auth.id, column_id, payload)
        .await?;

    Ok(Json(tasks))
}

#[utoipa::path(
    get,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    security(("bearerAuth" = [])),
    params(("task_id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task found", body = TaskDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Task is on another user's board", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskService::new(&state.db)
        .get_task(auth.id, task_id)
        .await?;

    Ok(Json(task))
}

/// Edit a task; a new `columnId` moves it to that column
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    security(("bearerAuth" = [])),
    params(("task_id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskDto,
    responses(
        (status = 200, description = "Task updated", body = TaskDto),
        (status = 400, description = "A field is invalid or the assignee does not exist", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Task or target column is on another user's board", body = ErrorDto),
        (status = 404, description = "Task or target column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<i32>,
    Json(payload): Json<UpdateTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskService::new(&state.db)
        .update_task(auth.id, task_id, payload)
        .await?;

    Ok(Json(task))
}

#[utoipa::path(
    delete,
    path = "/api/tasks/{task_id}",
    tag = TASK_TAG,
    security(("bearerAuth" = [])),
    params(("task_id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Task is on another user's board", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    TaskService::new(&state.db)
        .delete_task(auth.id, task_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Move a task into another column
#[utoipa::path(
    put,
    path = "/api/tasks/{task_id}/move",
    tag = TASK_TAG,
    security(("bearerAuth" = [])),
    params(("task_id" = i32, Path, description = "Task ID")),
    request_body = MoveTaskDto,
    responses(
        (status = 200, description = "Task moved", body = TaskDto),
        (status = 400, description = "Column missing, order negative or task already in that column", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Task or target column is on another user's board", body = ErrorDto),
        (status = 404, description = "Task or target column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn move_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<i32>,
    Json(payload): Json<MoveTaskDto>,
) -> Result<impl IntoResponse, Error> {
    let task = TaskService::new(&state.db)
        .move_task(auth.id, task_id, payload)
        .await?;

    Ok(Json(task))
}
