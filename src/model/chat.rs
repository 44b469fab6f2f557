use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::user::UserSummaryDto;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RoomKindDto {
    Direct,
    Group,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub user_id: i32,
    pub is_admin: bool,
    pub joined_at: NaiveDateTime,
    pub last_read: NaiveDateTime,
    pub user: UserSummaryDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: i32,
    pub room_id: i32,
    pub sender_id: i32,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub sender: UserSummaryDto,
}

/// A chat room with its participants.
///
/// `messages` holds only the latest message when rooms are listed, and the 20 most
/// recent messages (newest first) when a single room is fetched.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: i32,
    pub name: Option<String>,
    pub kind: RoomKindDto,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub participants: Vec<ParticipantDto>,
    pub messages: Vec<MessageDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessagePageDto {
    /// Messages in chronological order
    pub messages: Vec<MessageDto>,
    /// Pass as `cursor` to fetch the next older page, null when exhausted
    pub next_cursor: Option<i32>,
}

/// Query string of the message history
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct MessageQueryDto {
    /// Page size, defaults to 50, clamped to 1..=100
    pub limit: Option<u64>,
    /// Only messages older than this message ID
    pub cursor: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SendMessageDto {
    pub content: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDirectRoomDto {
    pub participant_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateGroupRoomDto {
    pub name: Option<String>,
    pub participant_ids: Vec<i32>,
}
