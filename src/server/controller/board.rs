use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        board::{BoardDetailDto, BoardDto, CreateBoardDto, UpdateBoardDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::board::BoardService,
    },
};

pub static BOARD_TAG: &str = "board";

#[utoipa::path(
    post,
    path = "/api/boards",
    tag = BOARD_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateBoardDto,
    responses(
        (status = 201, description = "Board created", body = BoardDto),
        (status = 400, description = "Title empty or too long", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateBoardDto>,
) -> Result<impl IntoResponse, Error> {
    let board = BoardService::new(&state.db)
        .create_board(auth.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(board)))
}

/// The caller's boards, most recently updated first
#[utoipa::path(
    get,
    path = "/api/boards",
    tag = BOARD_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Boards owned by the caller", body = Vec<BoardDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_boards(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let boards = BoardService::new(&state.db).list_boards(auth.id).await?;

    Ok(Json(boards))
}

/// A board with its columns and their tasks, all in order
#[utoipa::path(
    get,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    security(("bearerAuth" = [])),
    params(("board_id" = i32, Path, description = "Board ID")),
    responses(
        (status = 200, description = "Board found", body = BoardDetailDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Board belongs to another user", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let board = BoardService::new(&state.db)
        .get_board(auth.id, board_id)
        .await?;

    Ok(Json(board))
}

#[utoipa::path(
    put,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    security(("bearerAuth" = [])),
    params(("board_id" = i32, Path, description = "Board ID")),
    request_body = UpdateBoardDto,
    responses(
        (status = 200, description = "Board updated", body = BoardDto),
        (status = 400, description = "Title empty or too long", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Board belongs to another user", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i32>,
    Json(payload): Json<UpdateBoardDto>,
) -> Result<impl IntoResponse, Error> {
    let board = BoardService::new(&state.db)
        .update_board(auth.id, board_id, payload)
        .await?;

    Ok(Json(board))
}

/// Delete a board with all of its columns and tasks
#[utoipa::path(
    delete,
    path = "/api/boards/{board_id}",
    tag = BOARD_TAG,
    security(("bearerAuth" = [])),
    params(("board_id" = i32, Path, description = "Board ID")),
    responses(
        (status = 204, description = "Board deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Board belongs to another user", body = ErrorDto),
        (status = 404, description = "Board not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_board(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(board_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    BoardService::new(&state.db)
        .delete_board(auth.id, board_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
