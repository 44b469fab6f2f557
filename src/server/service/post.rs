use sea_orm::DatabaseConnection;

use crate::{
    model::social::{PostContentDto, PostDto},
    server::{
        data::{follow::FollowRepository, post::PostRepository},
        error::{social::SocialError, Error},
        model::db::{PostModel, UserModel},
        util::validation::Validator,
    },
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    /// Creates a new instance of [`PostService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a post, content is trimmed and must be 1 to 1000 characters
    pub async fn create_post(&self, user_id: i32, payload: PostContentDto) -> Result<PostDto, Error> {
        let content = valid_content(&payload.content)?;

        let post_repo = PostRepository::new(self.db);
        let post = post_repo.create(user_id, content).await?;

        tracing::debug!("User {} published post {}", user_id, post.id);

        self.get_post(post.id).await
    }

    /// Posts by every user the caller follows, newest first
    pub async fn feed(&self, user_id: i32) -> Result<Vec<PostDto>, Error> {
        let following = FollowRepository::new(self.db)
            .following_ids(user_id)
            .await?;

        self.posts_by(&following).await
    }

    /// A single user's posts, newest first
    pub async fn user_posts(&self, user_id: i32) -> Result<Vec<PostDto>, Error> {
        self.posts_by(&[user_id]).await
    }

    pub async fn get_post(&self, post_id: i32) -> Result<PostDto, Error> {
        let post_repo = PostRepository::new(self.db);

        match post_repo.get(post_id).await? {
            Some((post, author)) => post_dto(post, author),
            None => Err(SocialError::PostNotFound(post_id).into()),
        }
    }

    /// Replaces the content of a post owned by the caller
    ///
    /// # Returns
    /// - `Ok(PostDto)` - Post updated
    /// - `Err(Error::ValidationError)` - Content empty or too long
    /// - `Err(Error::SocialError(PostNotFound))` - No such post
    /// - `Err(Error::SocialError(NotPostOwner))` - Post belongs to another user
    pub async fn update_post(
        &self,
        user_id: i32,
        post_id: i32,
        payload: PostContentDto,
    ) -> Result<PostDto, Error> {
        let content = valid_content(&payload.content)?;

        let post_repo = PostRepository::new(self.db);
        let (post, author) = owned_post(&post_repo, user_id, post_id).await?;

        let post = post_repo.update_content(post, content).await?;

        post_dto(post, author)
    }

    /// Deletes a post owned by the caller
    pub async fn delete_post(&self, user_id: i32, post_id: i32) -> Result<(), Error> {
        let post_repo = PostRepository::new(self.db);
        owned_post(&post_repo, user_id, post_id).await?;

        post_repo.delete(post_id).await?;

        tracing::debug!("User {} deleted post {}", user_id, post_id);

        Ok(())
    }

    async fn posts_by(&self, user_ids: &[i32]) -> Result<Vec<PostDto>, Error> {
        PostRepository::new(self.db)
            .list_by_authors(user_ids)
            .await?
            .into_iter()
            .map(|(post, author)| post_dto(post, author))
            .collect()
    }
}

async fn owned_post(
    post_repo: &PostRepository<'_, DatabaseConnection>,
    user_id: i32,
    post_id: i32,
) -> Result<(PostModel, Option<UserModel>), Error> {
    let (post, author) = post_repo
        .get(post_id)
        .await?
        .ok_or(SocialError::PostNotFound(post_id))?;

    if post.user_id != user_id {
        return Err(SocialError::NotPostOwner(post_id).into());
    }

    Ok((post, author))
}

fn valid_content(content: &str) -> Result<&str, Error> {
    let content = content.trim();

    Validator::new()
        .length("content", content, 1, 1000)
        .finish()?;

    Ok(content)
}

fn post_dto(post: PostModel, author: Option<UserModel>) -> Result<PostDto, Error> {
    let author = author.ok_or_else(|| {
        Error::InternalError(format!("Author of post {} is missing", post.id))
    })?;

    Ok(PostDto {
        id: post.id,
        content: post.content,
        user_id: post.user_id,
        created_at: post.created_at,
        updated_at: post.updated_at,
        user: author.into(),
    })
}
