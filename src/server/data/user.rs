use chrono::Utc;
use entity::sea_orm_active_enums::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user with the `USER` role
    pub async fn create(
        &self,
        email: &str,
        username: &str,
        password_hash: &str,
        full_name: &str,
    ) -> Result<entity::bubble_user::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let user = entity::bubble_user::ActiveModel {
            email: ActiveValue::Set(email.to_string()),
            username: ActiveValue::Set(username.to_string()),
            password_hash: ActiveValue::Set(password_hash.to_string()),
            full_name: ActiveValue::Set(full_name.to_string()),
            avatar_url: ActiveValue::Set(None),
            role: ActiveValue::Set(Role::User),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::bubble_user::Model>, DbErr> {
        entity::prelude::BubbleUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets the users with the given IDs, IDs without a user are skipped
    pub async fn get_many(&self, user_ids: &[i32]) -> Result<Vec<entity::bubble_user::Model>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::BubbleUser::find()
            .filter(entity::bubble_user::Column::Id.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::bubble_user::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::bubble_user::Model>, DbErr> {
        entity::prelude::BubbleUser::find()
            .filter(entity::bubble_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::bubble_user::Model>, DbErr> {
        entity::prelude::BubbleUser::find()
            .filter(entity::bubble_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Lists every user ordered by ID
    pub async fn list(&self) -> Result<Vec<entity::bubble_user::Model>, DbErr> {
        entity::prelude::BubbleUser::find()
            .order_by_asc(entity::bubble_user::Column::Id)
            .all(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use bubble_test_utils::prelude::*;
        use entity::sea_orm_active_enums::Role;
        use sea_orm::SqlErr;

        use crate::server::data::user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let user = user_repo
                .create("alice@example.com", "alice", "hash", "Alice Smith")
                .await?;

            assert_eq!(user.username, "alice");
            assert_eq!(user.role, Role::User);

            Ok(())
        }

        /// Expect a unique constraint violation when the email is already registered
        #[tokio::test]
        async fn fails_for_duplicate_email() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;
            test.user().insert_user("alice").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo
                .create("alice@example.com", "alice2", "hash", "Alice Again")
                .await;

            assert!(matches!(
                result.unwrap_err().sql_err(),
                Some(SqlErr::UniqueConstraintViolation(_))
            ));

            Ok(())
        }
    }

    mod get {
        use bubble_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect Ok(Some(_)) when existing user is found
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;
            let user_model = test.user().insert_user("alice").await?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(user_model.id).await?;

            assert_eq!(result, Some(user_model));

            Ok(())
        }

        /// Expect Ok(None) when user is not found
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = test_setup_with_user_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(1).await?;

            assert!(result.is_none());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let user_repo = UserRepository::new(&test.db);
            let result = user_repo.get(1).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_many {
        use bubble_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect only existing users to be returned
        #[tokio::test]
        async fn skips_unknown_ids() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_user("alice")
                .with_user("bob")
                .build()
                .await?;

            let user_repo = UserRepository::new(&test.db);
            let users = user_repo.get_many(&[2, 1, 99]).await?;

            let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
            assert_eq!(ids, vec![1, 2]);

            Ok(())
        }
    }

    mod find_by_email {
        use bubble_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        /// Expect the user registered with the email to be found
        #[tokio::test]
        async fn finds_by_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user("alice").build().await?;

            let user_repo = UserRepository::new(&test.db);
            let found = user_repo.find_by_email("alice@example.com").await?;
            let missing = user_repo.find_by_email("bob@example.com").await?;

            assert_eq!(found.map(|u| u.username), Some("alice".to_string()));
            assert!(missing.is_none());

            Ok(())
        }
    }
}
