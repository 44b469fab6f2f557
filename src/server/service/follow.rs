use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::{
        social::{FollowDto, FollowStatusDto},
        user::UserSummaryDto,
    },
    server::{
        data::{follow::FollowRepository, user::UserRepository},
        error::{social::SocialError, Error},
    },
};

pub struct FollowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    /// Creates a new instance of [`FollowService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes `follower_id` follow `following_id`
    ///
    /// # Returns
    /// - `Ok(FollowDto)` - Follow created
    /// - `Err(Error::SocialError(SelfFollow))` - Both IDs are the same
    /// - `Err(Error::SocialError(UserNotFound))` - No user to follow
    /// - `Err(Error::SocialError(AlreadyFollowing))` - Follow already exists
    pub async fn follow(&self, follower_id: i32, following_id: i32) -> Result<FollowDto, Error> {
        if follower_id == following_id {
            return Err(SocialError::SelfFollow.into());
        }

        let follow_repo = FollowRepository::new(self.db);
        if follow_repo.find(follower_id, following_id).await?.is_some() {
            return Err(SocialError::AlreadyFollowing(following_id).into());
        }

        if UserRepository::new(self.db).get(following_id).await?.is_none() {
            return Err(SocialError::UserNotFound(following_id).into());
        }

        let follow = match follow_repo.create(follower_id, following_id).await {
            Ok(follow) => follow,
            Err(err) => {
                return match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(_)) => {
                        Err(SocialError::AlreadyFollowing(following_id).into())
                    }
                    _ => Err(err.into()),
                }
            }
        };

        tracing::debug!("User {} followed user {}", follower_id, following_id);

        Ok(follow.into())
    }

    pub async fn unfollow(&self, follower_id: i32, following_id: i32) -> Result<(), Error> {
        let result = FollowRepository::new(self.db)
            .delete(follower_id, following_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(SocialError::NotFollowing(following_id).into());
        }

        Ok(())
    }

    /// Users followed by `user_id`
    pub async fn following(&self, user_id: i32) -> Result<Vec<UserSummaryDto>, Error> {
        let ids = FollowRepository::new(self.db).following_ids(user_id).await?;

        self.summaries(&ids).await
    }

    /// Users following `user_id`
    pub async fn followers(&self, user_id: i32) -> Result<Vec<UserSummaryDto>, Error> {
        let ids = FollowRepository::new(self.db).follower_ids(user_id).await?;

        self.summaries(&ids).await
    }

    pub async fn status(
        &self,
        follower_id: i32,
        following_id: i32,
    ) -> Result<FollowStatusDto, Error> {
        let follow = FollowRepository::new(self.db)
            .find(follower_id, following_id)
            .await?;

        Ok(FollowStatusDto {
            is_following: follow.is_some(),
        })
    }

    async fn summaries(&self, user_ids: &[i32]) -> Result<Vec<UserSummaryDto>, Error> {
        let users = UserRepository::new(self.db).get_many(user_ids).await?;

        Ok(users.into_iter().map(UserSummaryDto::from).collect())
    }
}
