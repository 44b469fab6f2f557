use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

pub struct FollowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowRepository<'a, C> {
    /// Creates a new instance of [`FollowRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<entity::social_follow::Model, DbErr> {
        let follow = entity::social_follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            following_id: ActiveValue::Set(following_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        follow.insert(self.db).await
    }

    pub async fn find(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<Option<entity::social_follow::Model>, DbErr> {
        entity::prelude::SocialFollow::find()
            .filter(entity::social_follow::Column::FollowerId.eq(follower_id))
            .filter(entity::social_follow::Column::FollowingId.eq(following_id))
            .one(self.db)
            .await
    }

    /// Deletes a follow relationship
    ///
    /// Returns OK regardless of the relationship existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, follower_id: i32, following_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SocialFollow::delete_many()
            .filter(entity::social_follow::Column::FollowerId.eq(follower_id))
            .filter(entity::social_follow::Column::FollowingId.eq(following_id))
            .exec(self.db)
            .await
    }

    /// IDs of the users `user_id` follows, oldest follow first
    pub async fn following_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::SocialFollow::find()
            .select_only()
            .column(entity::social_follow::Column::FollowingId)
            .filter(entity::social_follow::Column::FollowerId.eq(user_id))
            .order_by_asc(entity::social_follow::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// IDs of the users following `user_id`, oldest follow first
    pub async fn follower_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::SocialFollow::find()
            .select_only()
            .column(entity::social_follow::Column::FollowerId)
            .filter(entity::social_follow::Column::FollowingId.eq(user_id))
            .order_by_asc(entity::social_follow::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }
}
