use chrono::Utc;
use entity::sea_orm_active_enums::RoomKind;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn chat(&self) -> ChatFixtures<'_> {
        ChatFixtures { test: self }
    }
}

pub struct ChatFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ChatFixtures<'a> {
    /// Insert a direct room between `creator_id` (admin) and `other_id`.
    pub async fn insert_direct_room(
        &self,
        creator_id: i32,
        other_id: i32,
    ) -> Result<entity::chat_room::Model, TestError> {
        let room = self.insert_room(RoomKind::Direct, None).await?;
        self.insert_participant(room.id, creator_id, true).await?;
        self.insert_participant(room.id, other_id, false).await?;

        Ok(room)
    }

    /// Insert a group room with `admin_id` as the only admin and `member_ids` as members.
    pub async fn insert_group_room(
        &self,
        name: &str,
        admin_id: i32,
        member_ids: &[i32],
    ) -> Result<entity::chat_room::Model, TestError> {
        let room = self
            .insert_room(RoomKind::Group, Some(name.to_string()))
            .await?;
        self.insert_participant(room.id, admin_id, true).await?;
        for member_id in member_ids {
            self.insert_participant(room.id, *member_id, false).await?;
        }

        Ok(room)
    }

    pub async fn insert_room(
        &self,
        kind: RoomKind,
        name: Option<String>,
    ) -> Result<entity::chat_room::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ChatRoom::insert(entity::chat_room::ActiveModel {
                name: ActiveValue::Set(name),
                kind: ActiveValue::Set(kind),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_participant(
        &self,
        room_id: i32,
        user_id: i32,
        is_admin: bool,
    ) -> Result<entity::chat_participant::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::ChatParticipant::insert(entity::chat_participant::ActiveModel {
                chat_room_id: ActiveValue::Set(room_id),
                user_id: ActiveValue::Set(user_id),
                is_admin: ActiveValue::Set(is_admin),
                joined_at: ActiveValue::Set(now),
                last_read: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_message(
        &self,
        room_id: i32,
        sender_id: i32,
        content: &str,
    ) -> Result<entity::chat_message::Model, TestError> {
        Ok(
            entity::prelude::ChatMessage::insert(entity::chat_message::ActiveModel {
                chat_room_id: ActiveValue::Set(room_id),
                sender_id: ActiveValue::Set(sender_id),
                content: ActiveValue::Set(content.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
