use sea_orm::{DatabaseConnection, SqlErr};

use crate::{
    model::{
        auth::{AuthResponseDto, LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        util::{
            jwt::JwtKeys,
            password::{hash_password, verify_password},
            validation::{is_strong_password, is_valid_email, is_valid_username, Validator},
        },
    },
};

/// Service for account registration and login.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Registers a new account and signs a token for it.
    ///
    /// The email is trimmed and lower-cased before it is checked and stored.
    ///
    /// # Returns
    /// - `Ok(AuthResponseDto)` - Account created
    /// - `Err(Error::ValidationError)` - One or more fields failed validation
    /// - `Err(Error::AuthError(EmailTaken | UsernameTaken))` - Email or username in use
    pub async fn register(&self, payload: RegisterDto) -> Result<AuthResponseDto, Error> {
        let email = payload.email.trim().to_lowercase();
        let username = payload.username.trim().to_string();
        let full_name = payload.full_name.trim().to_string();

        Validator::new()
            .check(is_valid_email(&email), "email", "Please provide a valid email address")
            .check(
                is_valid_username(&username),
                "username",
                "Username must be 3-20 characters of letters, numbers and underscores",
            )
            .check(
                is_strong_password(&payload.password),
                "password",
                "Password must be at least 6 characters with a number and an uppercase letter",
            )
            .length("fullName", &full_name, 2, 50)
            .finish()?;

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }
        if user_repo.find_by_username(&username).await?.is_some() {
            return Err(AuthError::UsernameTaken.into());
        }

        let password_hash = hash_password(&payload.password)?;

        // Another registration may have claimed the email or username since the checks above
        let user = match user_repo
            .create(&email, &username, &password_hash, &full_name)
            .await
        {
            Ok(user) => user,
            Err(err) => {
                return Err(match err.sql_err() {
                    Some(SqlErr::UniqueConstraintViolation(detail)) if detail.contains("username") => {
                        AuthError::UsernameTaken.into()
                    }
                    Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::EmailTaken.into(),
                    _ => err.into(),
                })
            }
        };

        tracing::info!("Registered user {} ({})", user.id, user.username);

        let token = self.jwt.issue(&user)?;

        Ok(AuthResponseDto {
            token,
            user: user.into(),
        })
    }

    /// Checks credentials and signs a token.
    ///
    /// Unknown emails and wrong passwords both fail with
    /// [`AuthError::InvalidCredentials`].
    pub async fn login(&self, payload: LoginDto) -> Result<AuthResponseDto, Error> {
        let email = payload.email.trim().to_lowercase();

        let user_repo = UserRepository::new(self.db);
        let user = user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&payload.password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.issue(&user)?;

        Ok(AuthResponseDto {
            token,
            user: user.into(),
        })
    }

    /// Gets the account behind a verified token.
    pub async fn me(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get(user_id).await? {
            Some(user) => Ok(user.into()),
            None => Err(AuthError::UserNotFound(user_id).into()),
        }
    }
}

#[cfg(test)]
mod tests {

    mod register {
        use bubble_test_utils::prelude::*;

        use crate::{
            model::auth::RegisterDto,
            server::{
                error::{auth::AuthError, Error},
                service::auth::AuthService,
                util::jwt::JwtKeys,
            },
        };

        fn payload(email: &str, username: &str) -> RegisterDto {
            RegisterDto {
                email: email.to_string(),
                username: username.to_string(),
                password: "Secret1".to_string(),
                full_name: "Alice Smith".to_string(),
            }
        }

        /// Expect a verifiable token and a normalised email
        #[tokio::test]
        async fn registers_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let jwt = JwtKeys::new(TEST_JWT_SECRET, 1);

            let auth_service = AuthService::new(&test.db, &jwt);
            let response = auth_service
                .register(payload("  Alice@Example.COM ", "alice"))
                .await
                .unwrap();

            assert_eq!(response.user.email, "alice@example.com");
            assert_eq!(jwt.verify(&response.token).unwrap().sub, response.user.id);

            Ok(())
        }

        /// Expect every failing field to be reported
        #[tokio::test]
        async fn reports_all_invalid_fields() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let jwt = JwtKeys::new(TEST_JWT_SECRET, 1);

            let auth_service = AuthService::new(&test.db, &jwt);
            let result = auth_service
                .register(RegisterDto {
                    email: "nope".to_string(),
                    username: "a!".to_string(),
                    password: "weak".to_string(),
                    full_name: "A".to_string(),
                })
                .await;

            let Err(Error::ValidationError(err)) = result else {
                panic!("expected validation error");
            };
            let fields: Vec<&str> = err.0.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, vec!["email", "username", "password", "fullName"]);

            Ok(())
        }

        /// Expect EmailTaken and UsernameTaken for existing accounts
        #[tokio::test]
        async fn rejects_taken_identifiers() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user("alice").build().await?;
            let jwt = JwtKeys::new(TEST_JWT_SECRET, 1);

            let auth_service = AuthService::new(&test.db, &jwt);
            let email_taken = auth_service
                .register(payload("alice@example.com", "alice2"))
                .await;
            let username_taken = auth_service
                .register(payload("other@example.com", "alice"))
                .await;

            assert!(matches!(
                email_taken,
                Err(Error::AuthError(AuthError::EmailTaken))
            ));
            assert!(matches!(
                username_taken,
                Err(Error::AuthError(AuthError::UsernameTaken))
            ));

            Ok(())
        }
    }

    mod login {
        use bubble_test_utils::prelude::*;

        use crate::{
            model::auth::{LoginDto, RegisterDto},
            server::{
                error::{auth::AuthError, Error},
                service::auth::AuthService,
                util::jwt::JwtKeys,
            },
        };

        /// Expect login to succeed with the registered password only
        #[tokio::test]
        async fn checks_password() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let jwt = JwtKeys::new(TEST_JWT_SECRET, 1);
            let auth_service = AuthService::new(&test.db, &jwt);
            auth_service
                .register(RegisterDto {
                    email: "alice@example.com".to_string(),
                    username: "alice".to_string(),
                    password: "Secret1".to_string(),
                    full_name: "Alice Smith".to_string(),
                })
                .await
                .unwrap();

            let ok = auth_service
                .login(LoginDto {
                    email: "ALICE@example.com".to_string(),
                    password: "Secret1".to_string(),
                })
                .await;
            let wrong = auth_service
                .login(LoginDto {
                    email: "alice@example.com".to_string(),
                    password: "Secret2".to_string(),
                })
                .await;

            assert!(ok.is_ok());
            assert!(matches!(
                wrong,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }

        /// Expect the same error for an unknown email
        #[tokio::test]
        async fn rejects_unknown_email() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;
            let jwt = JwtKeys::new(TEST_JWT_SECRET, 1);

            let auth_service = AuthService::new(&test.db, &jwt);
            let result = auth_service
                .login(LoginDto {
                    email: "ghost@example.com".to_string(),
                    password: "Secret1".to_string(),
                })
                .await;

            assert!(matches!(
                result,
                Err(Error::AuthError(AuthError::InvalidCredentials))
            ));

            Ok(())
        }
    }
}
