//! Chat rooms and messages.
//!
//! [`ChatService`] implements the REST operations on rooms and messages. Every
//! operation on an existing room first checks that the caller participates in it.
//! The realtime side lives in [`hub`], which only routes events between connections
//! and never touches the database.

pub mod hub;

#[cfg(test)]
mod tests;

use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use entity::sea_orm_active_enums::RoomKind;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::chat::{
        CreateDirectRoomDto, CreateGroupRoomDto, MessageDto, MessagePageDto, MessageQueryDto,
        ParticipantDto, RoomDto,
    },
    server::{
        data::{
            chat::{MessageRepository, ParticipantRepository, RoomRepository},
            user::UserRepository,
        },
        error::{chat::ChatError, Error},
        model::db::{ChatMessageModel, ChatParticipantModel, ChatRoomModel, UserModel},
    },
};

/// Messages embedded when a single room is fetched.
const ROOM_MESSAGE_COUNT: u64 = 20;
const DEFAULT_PAGE_SIZE: u64 = 50;
const MAX_PAGE_SIZE: u64 = 100;

pub struct ChatService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChatService<'a> {
    /// Creates a new instance of [`ChatService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the rooms a user participates in, most recently active first.
    ///
    /// Each room carries its participants and only its latest message.
    pub async fn list_rooms(&self, user_id: i32) -> Result<Vec<RoomDto>, Error> {
        let rooms = RoomRepository::new(self.db).list_for_user(user_id).await?;

        load_rooms(self.db, rooms, 1).await
    }

    /// Gets a room with its participants and 20 most recent messages, newest first.
    ///
    /// # Returns
    /// - `Ok(RoomDto)` - The caller participates in the room
    /// - `Err(Error::ChatError(NotParticipant))` - The caller is not a participant, or the
    ///   room does not exist
    pub async fn get_room(&self, user_id: i32, room_id: i32) -> Result<RoomDto, Error> {
        self.require_participant(user_id, room_id).await?;

        let room = RoomRepository::new(self.db)
            .get(room_id)
            .await?
            .ok_or(ChatError::RoomNotFound(room_id))?;

        single_room(self.db, room, ROOM_MESSAGE_COUNT).await
    }

    /// Gets one page of a room's history in chronological order.
    ///
    /// Pages walk backwards from the newest message. `next_cursor` is set when a full
    /// page was returned and more history may exist. Reading a non-empty page marks the
    /// room as read for the caller.
    pub async fn get_messages(
        &self,
        user_id: i32,
        room_id: i32,
        query: MessageQueryDto,
    ) -> Result<MessagePageDto, Error> {
        self.require_participant(user_id, room_id).await?;

        let limit = query
            .limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE);

        let rows = MessageRepository::new(self.db)
            .list_recent(room_id, limit, query.cursor)
            .await?;

        let next_cursor = if rows.len() as u64 == limit {
            rows.last().map(|(message, _)| message.id)
        } else {
            None
        };

        let mut messages = rows
            .into_iter()
            .map(|(message, sender)| message_dto(message, sender))
            .collect::<Result<Vec<_>, _>>()?;
        messages.reverse();

        if !messages.is_empty() {
            ParticipantRepository::new(self.db)
                .mark_read(room_id, user_id, Utc::now().naive_utc())
                .await?;
        }

        Ok(MessagePageDto {
            messages,
            next_cursor,
        })
    }

    /// Stores a message from a participant.
    ///
    /// The message, the room's activity timestamp and the sender's read marker are
    /// written in one transaction. Nothing is stored when the sender is not a
    /// participant.
    pub async fn send_message(
        &self,
        user_id: i32,
        room_id: i32,
        content: &str,
    ) -> Result<MessageDto, Error> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyMessage.into());
        }

        self.require_participant(user_id, room_id).await?;

        let now = Utc::now().naive_utc();
        let txn = self.db.begin().await?;

        let message = MessageRepository::new(&txn)
            .create(room_id, user_id, content, now)
            .await?;
        RoomRepository::new(&txn).touch(room_id, now).await?;
        ParticipantRepository::new(&txn)
            .mark_read(room_id, user_id, now)
            .await?;

        txn.commit().await?;

        let sender = UserRepository::new(self.db).get(user_id).await?;

        message_dto(message, sender)
    }

    /// Opens a direct room with another user, reusing the existing one if present.
    ///
    /// The caller becomes the room's admin when a new room is created.
    pub async fn create_direct_room(
        &self,
        user_id: i32,
        payload: CreateDirectRoomDto,
    ) -> Result<RoomDto, Error> {
        let other_id = payload
            .participant_id
            .ok_or(ChatError::MissingParticipant)?;

        if other_id == user_id {
            return Err(ChatError::SelfChat.into());
        }

        if UserRepository::new(self.db).get(other_id).await?.is_none() {
            return Err(ChatError::UnknownUser(other_id).into());
        }

        if let Some(room) = RoomRepository::new(self.db)
            .find_direct_between(user_id, other_id)
            .await?
        {
            tracing::debug!(
                "Reusing direct room {} between users {} and {}",
                room.id,
                user_id,
                other_id
            );

            return single_room(self.db, room, ROOM_MESSAGE_COUNT).await;
        }

        let txn = self.db.begin().await?;

        let room = RoomRepository::new(&txn)
            .create(RoomKind::Direct, None)
            .await?;
        let participant_repo = ParticipantRepository::new(&txn);
        participant_repo.add(room.id, user_id, true).await?;
        participant_repo.add(room.id, other_id, false).await?;

        txn.commit().await?;

        tracing::info!(
            "Created direct room {} between users {} and {}",
            room.id,
            user_id,
            other_id
        );

        single_room(self.db, room, ROOM_MESSAGE_COUNT).await
    }

    /// Creates a group room with the caller as its only admin.
    ///
    /// Duplicate participant IDs and the caller's own ID are ignored.
    pub async fn create_group_room(
        &self,
        user_id: i32,
        payload: CreateGroupRoomDto,
    ) -> Result<RoomDto, Error> {
        let name = payload
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ChatError::MissingGroupName)?
            .to_string();

        if payload.participant_ids.is_empty() {
            return Err(ChatError::NoParticipants.into());
        }

        let member_ids: Vec<i32> = payload
            .participant_ids
            .iter()
            .copied()
            .filter(|id| *id != user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let found = UserRepository::new(self.db).get_many(&member_ids).await?;
        if let Some(missing) = member_ids
            .iter()
            .find(|id| !found.iter().any(|user| user.id == **id))
        {
            return Err(ChatError::UnknownUser(*missing).into());
        }

        let txn = self.db.begin().await?;

        let room = RoomRepository::new(&txn)
            .create(RoomKind::Group, Some(name))
            .await?;
        let participant_repo = ParticipantRepository::new(&txn);
        participant_repo.add(room.id, user_id, true).await?;
        for member_id in &member_ids {
            participant_repo.add(room.id, *member_id, false).await?;
        }

        txn.commit().await?;

        tracing::info!(
            "User {} created group room {} with {} members",
            user_id,
            room.id,
            member_ids.len() + 1
        );

        single_room(self.db, room, ROOM_MESSAGE_COUNT).await
    }

    /// Returns true if the user participates in the room.
    pub async fn is_participant(&self, user_id: i32, room_id: i32) -> Result<bool, Error> {
        Ok(ParticipantRepository::new(self.db)
            .find(room_id, user_id)
            .await?
            .is_some())
    }

    async fn require_participant(&self, user_id: i32, room_id: i32) -> Result<(), Error> {
        if self.is_participant(user_id, room_id).await? {
            Ok(())
        } else {
            Err(ChatError::NotParticipant(room_id).into())
        }
    }
}

async fn single_room<C: ConnectionTrait>(
    db: &C,
    room: ChatRoomModel,
    message_limit: u64,
) -> Result<RoomDto, Error> {
    let room_id = room.id;

    load_rooms(db, vec![room], message_limit)
        .await?
        .pop()
        .ok_or_else(|| Error::InternalError(format!("Room {} vanished while loading", room_id)))
}

/// Attaches participants and the newest `message_limit` messages to each room.
async fn load_rooms<C: ConnectionTrait>(
    db: &C,
    rooms: Vec<ChatRoomModel>,
    message_limit: u64,
) -> Result<Vec<RoomDto>, Error> {
    let room_ids: Vec<i32> = rooms.iter().map(|room| room.id).collect();

    let mut participants: HashMap<i32, Vec<ParticipantDto>> = HashMap::new();
    for (participant, user) in ParticipantRepository::new(db)
        .list_for_rooms(&room_ids)
        .await?
    {
        participants
            .entry(participant.chat_room_id)
            .or_default()
            .push(participant_dto(participant, user)?);
    }

    let message_repo = MessageRepository::new(db);
    let mut dtos = Vec::with_capacity(rooms.len());

    for room in rooms {
        let messages = message_repo
            .list_recent(room.id, message_limit, None)
            .await?
            .into_iter()
            .map(|(message, sender)| message_dto(message, sender))
            .collect::<Result<Vec<_>, _>>()?;

        dtos.push(RoomDto {
            id: room.id,
            name: room.name,
            kind: room.kind.into(),
            created_at: room.created_at,
            updated_at: room.updated_at,
            participants: participants.remove(&room.id).unwrap_or_default(),
            messages,
        });
    }

    Ok(dtos)
}

fn participant_dto(
    participant: ChatParticipantModel,
    user: Option<UserModel>,
) -> Result<ParticipantDto, Error> {
    // Foreign key guarantees the user exists
    let user = user.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find user {} for participant {}",
            participant.user_id, participant.id
        ))
    })?;

    Ok(ParticipantDto {
        user_id: participant.user_id,
        is_admin: participant.is_admin,
        joined_at: participant.joined_at,
        last_read: participant.last_read,
        user: user.into(),
    })
}

fn message_dto(
    message: ChatMessageModel,
    sender: Option<UserModel>,
) -> Result<MessageDto, Error> {
    let sender = sender.ok_or_else(|| {
        Error::InternalError(format!(
            "Failed to find sender {} of message {}",
            message.sender_id, message.id
        ))
    })?;

    Ok(MessageDto {
        id: message.id,
        room_id: message.chat_room_id,
        sender_id: message.sender_id,
        content: message.content,
        created_at: message.created_at,
        sender: sender.into(),
    })
}
