use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        board::{ColumnDto, ColumnWithTasksDto, CreateColumnDto, ReorderDto, UpdateColumnDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::board::ColumnService,
    },
};

pub static COLUMN_TAG: &str = "column";

/// Add a column, appended unless `order` says where
#[utoipa::path(
    post,
    path = "/api/boards/{board_id}/columns",
    tag = COLUMN_TAG,
    security(("bearerAuth" = [])),
    params(("board_id" = i32, Path, description = "Board ID")),
    request_body = CreateColumnDto,
    responses(
        (status = 201, description = "Column created", body = ColumnDto),
        (status = 400, description = "Title empty or too long, or a negative order", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Board belongs to another user", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_column(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i32>,
    Json(payload): Json<CreateColumnDto>,
) -> Result<impl IntoResponse, Error> {
    let column = ColumnService::new(&state.db)
        .create_column(auth.id, board_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(column)))
}

#[utoipa::path(
    get,
    path = "/api/boards/{board_id}/columns",
    tag = COLUMN_TAG,
    security(("bearerAuth" = [])),
    params(("board_id" = i32, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Columns first to last", body = Vec<ColumnDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Board belongs to another user", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_columns(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let columns = ColumnService::new(&state.db)
        .list_columns(auth.id, board_id)
        .await?;

    Ok(Json(columns))
}

/// Set the order of every column of a board at once
#[utoipa::path(
    put,
    path = "/api/boards/{board_id}/columns/reorder",
    tag = COLUMN_TAG,
    security(("bearerAuth" = [])),
    params(("board_id" = i32, Path, description = "Board ID")),
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Columns in their new order", body = Vec<ColumnDto>),
        (status = 400, description = "IDs do not list every column exactly once", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Board belongs to another user", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_columns(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i32>,
    Json(payload): Json<ReorderDto>,
) -> Result<impl IntoResponse, Error> {
    let columns = ColumnService::new(&state.db)
        .reorder_columns(auth.id, board_id, payload)
        .await?;

    Ok(Json(columns))
}

#[utoipa::path(
    get,
    path = "/api/columns/{column_id}",
    tag = COLUMN_TAG,
    security(("bearerAuth" = [])),
    params(("column_id" = i32, Path, description = "Column ID")),
    responses(
        (status = 200, description = "Column with its tasks", body = ColumnWithTasksDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Column is on another user's board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_column(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(column_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let column = ColumnService::new(&state.db)
        .get_column(auth.id, column_id)
        .await?;

    Ok(Json(column))
}

/// Rename a column and/or move it to another position
#[utoipa::path(
    put,
    path = "/api/columns/{column_id}",
    tag = COLUMN_TAG,
    security(("bearerAuth" = [])),
    params(("column_id" = i32, Path, description = "Column ID")),
    request_body = UpdateColumnDto,
    responses(
        (status = 200, description = "Column updated", body = ColumnDto),
        (status = 400, description = "Title empty or too long, or a negative order", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Column is on another user's board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_column(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(column_id): Path<i32>,
    Json(payload): Json<UpdateColumnDto>,
) -> Result<impl IntoResponse, Error> {
    let column = ColumnService::new(&state.db)
        .update_column(auth.id, column_id, payload)
        .await?;

    Ok(Json(column))
}

#[utoipa::path(
    delete,
    path = "/api/columns/{column_id}",
    tag = COLUMN_TAG,
    security(("bearerAuth" = [])),
    params(("column_id" = i32, Path, description = "Column ID")),
    responses(
        (status = 204, description = "Column and its tasks deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Column is on another user's board", body = ErrorDto),
        (status = 404, description = "Column not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_column(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(column_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ColumnService::new(&state.db)
        .delete_column(auth.id, column_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
