use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn social(&self) -> SocialFixtures<'_> {
        SocialFixtures { test: self }
    }
}

pub struct SocialFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> SocialFixtures<'a> {
    pub async fn insert_post(
        &self,
        user_id: i32,
        content: &str,
    ) -> Result<entity::social_post::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::SocialPost::insert(entity::social_post::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                content: ActiveValue::Set(content.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_follow(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<entity::social_follow::Model, TestError> {
        Ok(
            entity::prelude::SocialFollow::insert(entity::social_follow::ActiveModel {
                follower_id: ActiveValue::Set(follower_id),
                following_id: ActiveValue::Set(following_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
