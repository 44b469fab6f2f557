use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        social::{PostContentDto, PostDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::post::PostService,
    },
};

pub static POST_TAG: &str = "post";

#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    security(("bearerAuth" = [])),
    request_body = PostContentDto,
    responses(
        (status = 201, description = "Post published", body = PostDto),
        (status = 400, description = "Content empty or longer than 1000 characters", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<PostContentDto>,
) -> Result<impl IntoResponse, Error> {
    let post = PostService::new(&state.db).create_post(auth.id, payload).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Posts from everyone the caller follows, newest first
#[utoipa::path(
    get,
    path = "/api/posts/feed",
    tag = POST_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Feed", body = Vec<PostDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn feed(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse, Error> {
    let posts = PostService::new(&state.db).feed(auth.id).await?;

    Ok(Json(posts))
}

/// A user's posts, newest first
#[utoipa::path(
    get,
    path = "/api/posts/user/{user_id}",
    tag = POST_TAG,
    params(("user_id" = i32, Path, description = "Author's user ID")),
    responses(
        (status = 200, description = "Posts by the user", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let posts = PostService::new(&state.db).user_posts(user_id).await?;

    Ok(Json(posts))
}

#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Post found", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let post = PostService::new(&state.db).get_post(id).await?;

    Ok(Json(post))
}

/// Edit one of the caller's posts
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    request_body = PostContentDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Content empty or longer than 1000 characters", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Post belongs to another user", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<PostContentDto>,
) -> Result<impl IntoResponse, Error> {
    let post = PostService::new(&state.db)
        .update_post(auth.id, id, payload)
        .await?;

    Ok(Json(post))
}

/// Delete one of the caller's posts
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    security(("bearerAuth" = [])),
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Post belongs to another user", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    PostService::new(&state.db).delete_post(auth.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
