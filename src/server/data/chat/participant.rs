use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct ParticipantRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ParticipantRepository<'a, C> {
    /// Creates a new instance of [`ParticipantRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn add(
        &self,
        room_id: i32,
        user_id: i32,
        is_admin: bool,
    ) -> Result<entity::chat_participant::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let participant = entity::chat_participant::ActiveModel {
            chat_room_id: ActiveValue::Set(room_id),
            user_id: ActiveValue::Set(user_id),
            is_admin: ActiveValue::Set(is_admin),
            joined_at: ActiveValue::Set(now),
            last_read: ActiveValue::Set(now),
            ..Default::default()
        };

        participant.insert(self.db).await
    }

    pub async fn find(
        &self,
        room_id: i32,
        user_id: i32,
    ) -> Result<Option<entity::chat_participant::Model>, DbErr> {
        entity::prelude::ChatParticipant::find()
            .filter(entity::chat_participant::Column::ChatRoomId.eq(room_id))
            .filter(entity::chat_participant::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Participants of the given rooms with their user records, in join order
    pub async fn list_for_rooms(
        &self,
        room_ids: &[i32],
    ) -> Result<
        Vec<(
            entity::chat_participant::Model,
            Option<entity::bubble_user::Model>,
        )>,
        DbErr,
    > {
        if room_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::ChatParticipant::find()
            .filter(entity::chat_participant::Column::ChatRoomId.is_in(room_ids.iter().copied()))
            .order_by_asc(entity::chat_participant::Column::Id)
            .find_also_related(entity::bubble_user::Entity)
            .all(self.db)
            .await
    }

    /// Sets `last_read` for a user's membership of a room
    pub async fn mark_read(&self, room_id: i32, user_id: i32, at: NaiveDateTime) -> Result<(), DbErr> {
        entity::prelude::ChatParticipant::update_many()
            .col_expr(
                entity::chat_participant::Column::LastRead,
                sea_orm::sea_query::Expr::value(at),
            )
            .filter(entity::chat_participant::Column::ChatRoomId.eq(room_id))
            .filter(entity::chat_participant::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
