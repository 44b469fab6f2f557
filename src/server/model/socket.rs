//! Realtime chat frames.
//!
//! Every WebSocket text frame is a JSON object `{ "event": <name>, "data": <payload> }`.

use serde::{Deserialize, Serialize};

use crate::model::chat::MessageDto;

/// Payload naming a room, used by join/leave/typing events.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomRef {
    /// Target room
    pub room_id: Option<i32>,
}

/// Payload of a `new_message` frame sent by a client.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OutgoingMessage {
    /// Target room
    pub room_id: Option<i32>,
    /// Message text
    pub content: Option<String>,
}

/// Frames a client may send.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ClientEvent {
    /// Subscribe to a room the user participates in
    JoinRoom(RoomRef),
    /// Unsubscribe from a room
    LeaveRoom(RoomRef),
    /// Persist and broadcast a message
    NewMessage(OutgoingMessage),
    /// The user started typing
    UserTyping(RoomRef),
    /// The user stopped typing
    UserStoppedTyping(RoomRef),
}

/// Presence change, global when `room_id` is absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceEvent {
    /// User whose presence changed
    pub user_id: i32,
    /// Room the change applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i32>,
}

/// Typing indicator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypingEvent {
    /// User who is typing
    pub user_id: i32,
    /// Room being typed in
    pub room_id: i32,
}

/// Error reported to a single connection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocketErrorEvent {
    /// Human readable explanation
    pub message: String,
}

/// Frames the server sends.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerEvent {
    /// A message was persisted in a joined room
    NewMessage(MessageDto),
    /// A user connected, or joined a room
    UserOnline(PresenceEvent),
    /// A user disconnected, or left a room
    UserOffline(PresenceEvent),
    /// Another room member started typing
    UserTyping(TypingEvent),
    /// Another room member stopped typing
    UserStoppedTyping(TypingEvent),
    /// The last client frame could not be handled
    Error(SocketErrorEvent),
}

impl ServerEvent {
    /// Builds an `error` frame.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(SocketErrorEvent {
            message: message.into(),
        })
    }
}
