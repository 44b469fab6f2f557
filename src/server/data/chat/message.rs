use chrono::NaiveDateTime;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    /// Creates a new instance of [`MessageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        room_id: i32,
        sender_id: i32,
        content: &str,
        created_at: NaiveDateTime,
    ) -> Result<entity::chat_message::Model, DbErr> {
        let message = entity::chat_message::ActiveModel {
            chat_room_id: ActiveValue::Set(room_id),
            sender_id: ActiveValue::Set(sender_id),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(created_at),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    /// Gets up to `limit` messages of a room, newest first, with their senders
    ///
    /// With a `before` message ID only strictly older messages are returned.
    pub async fn list_recent(
        &self,
        room_id: i32,
        limit: u64,
        before: Option<i32>,
    ) -> Result<
        Vec<(
            entity::chat_message::Model,
            Option<entity::bubble_user::Model>,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::ChatMessage::find()
            .filter(entity::chat_message::Column::ChatRoomId.eq(room_id));

        if let Some(before) = before {
            query = query.filter(entity::chat_message::Column::Id.lt(before));
        }

        query
            .order_by_desc(entity::chat_message::Column::Id)
            .limit(limit)
            .find_also_related(entity::bubble_user::Entity)
            .all(self.db)
            .await
    }
}
