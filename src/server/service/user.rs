use sea_orm::DatabaseConnection;

use crate::{
    model::user::UserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every user ordered by ID
    pub async fn list_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);
        let users = user_repo.list().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Gets a user by ID
    ///
    /// # Returns
    /// - `Ok(UserDto)` - User found
    /// - `Err(Error::AuthError(AuthError::UserNotFound))` - No user with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get(user_id).await? {
            Some(user) => Ok(user.into()),
            None => Err(AuthError::UserNotFound(user_id).into()),
        }
    }
}
