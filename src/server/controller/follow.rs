use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        social::{FollowDto, FollowStatusDto},
        user::UserSummaryDto,
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::follow::FollowService,
    },
};

pub static FOLLOW_TAG: &str = "follow";

/// Follow a user
#[utoipa::path(
    post,
    path = "/api/follow/{user_id}",
    tag = FOLLOW_TAG,
    security(("bearerAuth" = [])),
    params(("user_id" = i32, Path, description = "User to follow")),
    responses(
        (status = 201, description = "Now following", body = FollowDto),
        (status = 400, description = "Cannot follow yourself", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Already following", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn follow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let follow = FollowService::new(&state.db).follow(auth.id, user_id).await?;

    Ok((StatusCode::CREATED, Json(follow)))
}

/// Stop following a user
#[utoipa::path(
    delete,
    path = "/api/follow/{user_id}",
    tag = FOLLOW_TAG,
    security(("bearerAuth" = [])),
    params(("user_id" = i32, Path, description = "User to unfollow")),
    responses(
        (status = 204, description = "No longer following"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Not following this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unfollow(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FollowService::new(&state.db).unfollow(auth.id, user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Users followed by the given user
#[utoipa::path(
    get,
    path = "/api/follow/{user_id}/following",
    tag = FOLLOW_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Followed users", body = Vec<UserSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn following(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let users = FollowService::new(&state.db).following(user_id).await?;

    Ok(Json(users))
}

/// Users following the given user
#[utoipa::path(
    get,
    path = "/api/follow/{user_id}/followers",
    tag = FOLLOW_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Followers", body = Vec<UserSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn followers(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let users = FollowService::new(&state.db).followers(user_id).await?;

    Ok(Json(users))
}

/// Whether the caller follows the given user
#[utoipa::path(
    get,
    path = "/api/follow/{user_id}/status",
    tag = FOLLOW_TAG,
    security(("bearerAuth" = [])),
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Follow status", body = FollowStatusDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn status(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let status = FollowService::new(&state.db).status(auth.id, user_id).await?;

    Ok(Json(status))
}
