use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        chat::{
            CreateDirectRoomDto, CreateGroupRoomDto, MessageDto, MessagePageDto,
            MessageQueryDto, RoomDto, SendMessageDto,
        },
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser, socket::ServerEvent},
        service::chat::ChatService,
    },
};

pub static CHAT_TAG: &str = "chat";

/// List the caller's rooms, most recently active first
///
/// Each room carries its participants and only its latest message.
#[utoipa::path(
    get,
    path = "/api/chat/rooms",
    tag = CHAT_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Rooms the caller participates in", body = Vec<RoomDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, Error> {
    let rooms = ChatService::new(&state.db).list_rooms(auth.id).await?;

    Ok(Json(rooms))
}

/// Get a room with its participants and the 20 most recent messages
#[utoipa::path(
    get,
    path = "/api/chat/rooms/{room_id}",
    tag = CHAT_TAG,
    security(("bearerAuth" = [])),
    params(("room_id" = i32, Path, description = "Chat room ID")),
    responses(
        (status = 200, description = "Room found", body = RoomDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let room = ChatService::new(&state.db).get_room(auth.id, room_id).await?;

    Ok(Json(room))
}

/// Page through a room's message history, newest page first
#[utoipa::path(
    get,
    path = "/api/chat/rooms/{room_id}/messages",
    tag = CHAT_TAG,
    security(("bearerAuth" = [])),
    params(
        ("room_id" = i32, Path, description = "Chat room ID"),
        MessageQueryDto
    ),
    responses(
        (status = 200, description = "One page of messages in chronological order", body = MessagePageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<i32>,
    Query(query): Query<MessageQueryDto>,
) -> Result<impl IntoResponse, Error> {
    let page = ChatService::new(&state.db)
        .get_messages(auth.id, room_id, query)
        .await?;

    Ok(Json(page))
}

/// Post a message to a room
///
/// The stored message is also pushed to every socket that joined the room.
///
/// # Responses
/// - 201 (Created): Message stored and broadcast
/// - 400 (Bad Request): Content empty after trimming
/// - 403 (Forbidden): Caller is not a participant, nothing is stored
#[utoipa::path(
    post,
    path = "/api/chat/rooms/{room_id}/messages",
    tag = CHAT_TAG,
    security(("bearerAuth" = [])),
    params(("room_id" = i32, Path, description = "Chat room ID")),
    request_body = SendMessageDto,
    responses(
        (status = 201, description = "Message stored", body = MessageDto),
        (status = 400, description = "Empty message", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a participant", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send_message(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(room_id): Path<i32>,
    Json(payload): Json<SendMessageDto>,
) -> Result<impl IntoResponse, Error> {
    let message = ChatService::new(&state.db)
        .send_message(auth.id, room_id, &payload.content)
        .await?;

    state
        .hub
        .broadcast_room(room_id, ServerEvent::NewMessage(message.clone()));

    Ok((StatusCode::CREATED, Json(message)))
}

/// Open a direct room with another user
///
/// Returns the existing room when the two users already share one.
#[utoipa::path(
    post,
    path = "/api/chat/direct",
    tag = CHAT_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateDirectRoomDto,
    responses(
        (status = 201, description = "Direct room", body = RoomDto),
        (status = 400, description = "Missing, own or unknown participant", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_direct_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateDirectRoomDto>,
) -> Result<impl IntoResponse, Error> {
    let room = ChatService::new(&state.db)
        .create_direct_room(auth.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(room)))
}

/// Create a group room administered by the caller
#[utoipa::path(
    post,
    path = "/api/chat/group",
    tag = CHAT_TAG,
    security(("bearerAuth" = [])),
    request_body = CreateGroupRoomDto,
    responses(
        (status = 201, description = "Group room created", body = RoomDto),
        (status = 400, description = "Blank name, no participants or unknown user", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group_room(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<CreateGroupRoomDto>,
) -> Result<impl IntoResponse, Error> {
    let room = ChatService::new(&state.db)
        .create_group_room(auth.id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(room)))
}
