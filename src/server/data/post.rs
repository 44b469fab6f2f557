use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

type PostWithAuthor = (
    entity::social_post::Model,
    Option<entity::bubble_user::Model>,
);

pub struct PostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PostRepository<'a, C> {
    /// Creates a new instance of [`PostRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        content: &str,
    ) -> Result<entity::social_post::Model, DbErr> {
        let now = Utc::now().naive_utc();
        let post = entity::social_post::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(content.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        post.insert(self.db).await
    }

    /// Gets a post with its author
    pub async fn get(&self, post_id: i32) -> Result<Option<PostWithAuthor>, DbErr> {
        entity::prelude::SocialPost::find_by_id(post_id)
            .find_also_related(entity::bubble_user::Entity)
            .one(self.db)
            .await
    }

    /// Posts written by any of `user_ids`, newest first
    pub async fn list_by_authors(&self, user_ids: &[i32]) -> Result<Vec<PostWithAuthor>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::SocialPost::find()
            .filter(entity::social_post::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_desc(entity::social_post::Column::CreatedAt)
            .order_by_desc(entity::social_post::Column::Id)
            .find_also_related(entity::bubble_user::Entity)
            .all(self.db)
            .await
    }

    pub async fn update_content(
        &self,
        post: entity::social_post::Model,
        content: &str,
    ) -> Result<entity::social_post::Model, DbErr> {
        let mut post_am = post.into_active_model();
        post_am.content = ActiveValue::Set(content.to_string());
        post_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        post_am.update(self.db).await
    }

    pub async fn delete(&self, post_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::SocialPost::delete_by_id(post_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod get {
        use bubble_test_utils::prelude::*;

        use crate::server::data::post::PostRepository;

        /// Expect the post with its author attached
        #[tokio::test]
        async fn includes_author() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_social_tables()
                .with_user("alice")
                .build()
                .await?;
            let post = test.social().insert_post(1, "hello").await?;

            let post_repo = PostRepository::new(&test.db);
            let (found, author) = post_repo.get(post.id).await?.unwrap();

            assert_eq!(found.content, "hello");
            assert_eq!(author.map(|u| u.username), Some("alice".to_string()));
            assert!(post_repo.get(post.id + 1).await?.is_none());

            Ok(())
        }
    }

    mod list_by_authors {
        use bubble_test_utils::prelude::*;

        use crate::server::data::post::PostRepository;

        /// Expect only posts by the given authors, newest first
        #[tokio::test]
        async fn lists_newest_first() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_social_tables()
                .with_user("alice")
                .with_user("bob")
                .with_user("carol")
                .build()
                .await?;
            let first = test.social().insert_post(1, "first").await?;
            test.social().insert_post(3, "hidden").await?;
            let second = test.social().insert_post(2, "second").await?;

            let post_repo = PostRepository::new(&test.db);
            let posts = post_repo.list_by_authors(&[1, 2]).await?;

            let ids: Vec<i32> = posts.iter().map(|(p, _)| p.id).collect();
            assert_eq!(ids, vec![second.id, first.id]);

            Ok(())
        }

        /// Expect no query and no posts for an empty author list
        #[tokio::test]
        async fn empty_for_no_authors() -> Result<(), TestError> {
            let test = test_setup_with_tables!()?;

            let post_repo = PostRepository::new(&test.db);
            let posts = post_repo.list_by_authors(&[]).await?;

            assert!(posts.is_empty());

            Ok(())
        }
    }
}
