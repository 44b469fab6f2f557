use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, LoginDto, RegisterDto},
        user::UserDto,
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Create an account and receive a bearer token
///
/// # Responses
/// - 201 (Created): Account created, token and user returned
/// - 400 (Bad Request): One or more fields failed validation
/// - 409 (Conflict): Email or username already taken
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration details", body = ErrorDto),
        (status = 409, description = "Email or username already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.jwt);

    let response = auth_service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Exchange email and password for a bearer token
///
/// # Responses
/// - 200 (OK): Token and user returned
/// - 401 (Unauthorized): Unknown email or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.jwt);

    let response = auth_service.login(payload).await?;

    Ok(Json(response))
}

/// Get the account behind the bearer token
///
/// # Responses
/// - 200 (OK): Current user
/// - 401 (Unauthorized): Missing or invalid token
/// - 404 (Not Found): Account deleted since the token was issued
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db, &state.jwt);

    let user = auth_service.me(auth.id).await?;

    Ok(Json(user))
}
