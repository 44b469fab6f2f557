use std::collections::{HashMap, HashSet};

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::RoomKind;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    /// Creates a new instance of [`RoomRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        kind: RoomKind,
        name: Option<String>,
    ) -> Result<entity::chat_room::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let room = entity::chat_room::ActiveModel {
            name: ActiveValue::Set(name),
            kind: ActiveValue::Set(kind),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        room.insert(self.db).await
    }

    pub async fn get(&self, room_id: i32) -> Result<Option<entity::chat_room::Model>, DbErr> {
        entity::prelude::ChatRoom::find_by_id(room_id)
            .one(self.db)
            .await
    }

    /// Lists rooms `user_id` participates in, most recently active first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<entity::chat_room::Model>, DbErr> {
        entity::prelude::ChatRoom::find()
            .join(
                JoinType::InnerJoin,
                entity::chat_room::Relation::ChatParticipant.def(),
            )
            .filter(entity::chat_participant::Column::UserId.eq(user_id))
            .order_by_desc(entity::chat_room::Column::UpdatedAt)
            .order_by_desc(entity::chat_room::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a direct room whose participants are exactly `user_id` and `other_id`
    pub async fn find_direct_between(
        &self,
        user_id: i32,
        other_id: i32,
    ) -> Result<Option<entity::chat_room::Model>, DbErr> {
        let candidates = entity::prelude::ChatRoom::find()
            .join(
                JoinType::InnerJoin,
                entity::chat_room::Relation::ChatParticipant.def(),
            )
            .filter(entity::chat_room::Column::Kind.eq(RoomKind::Direct))
            .filter(entity::chat_participant::Column::UserId.eq(user_id))
            .order_by_asc(entity::chat_room::Column::Id)
            .all(self.db)
            .await?;

        if candidates.is_empty() {
            return Ok(None);
        }

        let participants = entity::prelude::ChatParticipant::find()
            .filter(
                entity::chat_participant::Column::ChatRoomId
                    .is_in(candidates.iter().map(|room| room.id)),
            )
            .all(self.db)
            .await?;

        let mut members: HashMap<i32, HashSet<i32>> = HashMap::new();
        for participant in participants {
            members
                .entry(participant.chat_room_id)
                .or_default()
                .insert(participant.user_id);
        }

        let wanted: HashSet<i32> = [user_id, other_id].into_iter().collect();

        Ok(candidates
            .into_iter()
            .find(|room| members.get(&room.id) == Some(&wanted)))
    }

    /// Sets the room's `updated_at`, used to order rooms by activity
    pub async fn touch(&self, room_id: i32, at: NaiveDateTime) -> Result<(), DbErr> {
        entity::prelude::ChatRoom::update_many()
            .col_expr(
                entity::chat_room::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(at),
            )
            .filter(entity::chat_room::Column::Id.eq(room_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
