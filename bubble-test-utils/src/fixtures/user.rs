use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a regular user named `username` with email `<username>@example.com`.
    pub async fn insert_user(&self, username: &str) -> Result<entity::bubble_user::Model, TestError> {
        self.insert_user_with_role(username, Role::User).await
    }

    /// Insert an admin user named `username`.
    pub async fn insert_admin(
        &self,
        username: &str,
    ) -> Result<entity::bubble_user::Model, TestError> {
        self.insert_user_with_role(username, Role::Admin).await
    }

    pub async fn insert_user_with_role(
        &self,
        username: &str,
        role: Role,
    ) -> Result<entity::bubble_user::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::BubbleUser::insert(entity::bubble_user::ActiveModel {
                email: ActiveValue::Set(format!("{}@example.com", username)),
                username: ActiveValue::Set(username.to_string()),
                password_hash: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
                full_name: ActiveValue::Set(format!("{} Test", username)),
                avatar_url: ActiveValue::Set(None),
                role: ActiveValue::Set(role),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
