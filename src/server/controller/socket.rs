//! Realtime chat over WebSocket.
//!
//! A connection authenticates once, before the upgrade, with a token from the `token`
//! query parameter or an `Authorization: Bearer` header. Afterwards every text frame is a
//! JSON [`ClientEvent`]. Outbound frames are queued through the [`ChatHub`] and written by
//! a dedicated task so broadcasts never wait on a slow socket.
//!
//! [`ChatHub`]: crate::server::service::chat::hub::ChatHub

use axum::{
    extract::{
        ws::{rejection::WebSocketUpgradeRejection, Message, WebSocket, WebSocketUpgrade},
        Query, State,
    },
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use futures::{SinkExt, StreamExt};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{
        controller::chat::CHAT_TAG,
        error::{auth::AuthError, Error},
        model::{
            app::AppState,
            auth::{bearer_token, AuthUser},
            socket::{ClientEvent, OutgoingMessage, PresenceEvent, RoomRef, ServerEvent, TypingEvent},
        },
        service::chat::{hub::ConnectionId, ChatService},
    },
};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct SocketQuery {
    /// Bearer token, used when no Authorization header is sent
    pub token: Option<String>,
}

/// Open the realtime chat socket
///
/// Frames are JSON objects `{ "event": <name>, "data": <payload> }`.
///
/// # Responses
/// - 101 (Switching Protocols): Socket opened
/// - 401 (Unauthorized): Missing or invalid token, checked before upgrading
#[utoipa::path(
    get,
    path = "/api/chat/ws",
    tag = CHAT_TAG,
    params(SocketQuery),
    responses(
        (status = 101, description = "Switching to the WebSocket protocol"),
        (status = 401, description = "Missing or invalid token", body = ErrorDto)
    ),
)]
pub async fn connect(
    State(state): State<AppState>,
    Query(query): Query<SocketQuery>,
    headers: HeaderMap,
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
) -> Result<Response, Error> {
    let token = query
        .token
        .as_deref()
        .filter(|token| !token.is_empty())
        .or_else(|| bearer_token(&headers))
        .ok_or(AuthError::MissingToken)?;
    let user: AuthUser = state.jwt.verify(token)?.into();

    let upgrade = match upgrade {
        Ok(upgrade) => upgrade,
        Err(rejection) => return Ok(rejection.into_response()),
    };

    Ok(upgrade.on_upgrade(move |socket| run_connection(state, user.id, socket)))
}

async fn run_connection(state: AppState, user_id: i32, socket: WebSocket) {
    let (mut sink, mut stream) = socket.split();
    let (connection_id, mut events) = state.hub.register(user_id);

    tracing::debug!("User {} connected as socket {}", user_id, connection_id);

    state.hub.broadcast_all(ServerEvent::UserOnline(PresenceEvent {
        user_id,
        room_id: None,
    }));

    let writer = tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let frame = match serde_json::to_string(&event) {
                Ok(frame) => frame,
                Err(e) => {
                    tracing::error!("Failed to encode socket event: {}", e);
                    continue;
                }
            };

            if sink.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(message)) = stream.next().await {
        match message {
            Message::Text(text) => {
                handle_frame(&state, connection_id, user_id, text.as_str()).await
            }
            Message::Close(_) => break,
            _ => {}
        }
    }

    writer.abort();

    if let Some(user_id) = state.hub.unregister(connection_id) {
        state.hub.broadcast_all(ServerEvent::UserOffline(PresenceEvent {
            user_id,
            room_id: None,
        }));

        tracing::debug!("User {} disconnected socket {}", user_id, connection_id);
    }
}

/// Handles one client frame. Failures are reported to the sending connection only.
pub(crate) async fn handle_frame(
    state: &AppState,
    connection_id: ConnectionId,
    user_id: i32,
    frame: &str,
) {
    let event = match serde_json::from_str::<ClientEvent>(frame) {
        Ok(event) => event,
        Err(e) => {
            tracing::debug!("Unreadable frame from socket {}: {}", connection_id, e);
            state
                .hub
                .send_to(connection_id, ServerEvent::error("Unknown event"));
            return;
        }
    };

    match event {
        ClientEvent::JoinRoom(RoomRef { room_id }) => {
            let Some(room_id) = room_id else {
                state
                    .hub
                    .send_to(connection_id, ServerEvent::error("Room ID is required"));
                return;
            };

            match ChatService::new(&state.db)
                .is_participant(user_id, room_id)
                .await
            {
                Ok(true) => {
                    state.hub.join(connection_id, room_id);
                    state.hub.broadcast_room_except(
                        room_id,
                        connection_id,
                        ServerEvent::UserOnline(PresenceEvent {
                            user_id,
                            room_id: Some(room_id),
                        }),
                    );
                }
                Ok(false) => state.hub.send_to(
                    connection_id,
                    ServerEvent::error("Cannot join room: Not authorized"),
                ),
                Err(e) => {
                    tracing::error!("Failed to check participation in room {}: {}", room_id, e);
                    state
                        .hub
                        .send_to(connection_id, ServerEvent::error("Failed to join room"));
                }
            }
        }
        ClientEvent::LeaveRoom(RoomRef { room_id }) => {
            if let Some(room_id) = room_id {
                if state.hub.leave(connection_id, room_id) {
                    state.hub.broadcast_room(
                        room_id,
                        ServerEvent::UserOffline(PresenceEvent {
                            user_id,
                            room_id: Some(room_id),
                        }),
                    );
                }
            }
        }
        ClientEvent::NewMessage(OutgoingMessage {
            room_id: Some(room_id),
            content: Some(content),
        }) => {
            match ChatService::new(&state.db)
                .send_message(user_id, room_id, &content)
                .await
            {
                Ok(message) => state
                    .hub
                    .broadcast_room(room_id, ServerEvent::NewMessage(message)),
                Err(e) => {
                    tracing::debug!("Socket message to room {} rejected: {}", room_id, e);
                    state
                        .hub
                        .send_to(connection_id, ServerEvent::error("Failed to send message"));
                }
            }
        }
        ClientEvent::NewMessage(_) => state.hub.send_to(
            connection_id,
            ServerEvent::error("Room ID and content are required"),
        ),
        ClientEvent::UserTyping(RoomRef { room_id }) => {
            relay_typing(state, connection_id, user_id, room_id, ServerEvent::UserTyping)
        }
        ClientEvent::UserStoppedTyping(RoomRef { room_id }) => relay_typing(
            state,
            connection_id,
            user_id,
            room_id,
            ServerEvent::UserStoppedTyping,
        ),
    }
}

fn relay_typing(
    state: &AppState,
    connection_id: ConnectionId,
    user_id: i32,
    room_id: Option<i32>,
    event: fn(TypingEvent) -> ServerEvent,
) {
    let Some(room_id) = room_id else {
        return;
    };

    if state.hub.is_in_room(connection_id, room_id) {
        state.hub.broadcast_room_except(
            room_id,
            connection_id,
            event(TypingEvent { user_id, room_id }),
        );
    }
}
