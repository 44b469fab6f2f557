//! Bearer token claims and the authenticated user extractor.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use entity::sea_orm_active_enums::Role;
use serde::{Deserialize, Serialize};

use crate::{
    model::user::RoleDto,
    server::{
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

/// Payload of a bearer token.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: i32,
    /// Email at the time the token was issued
    pub email: String,
    /// Role at the time the token was issued
    pub role: RoleDto,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expires at, unix seconds
    pub exp: i64,
}

/// The user making the request, taken from a verified bearer token.
///
/// Using this as a handler argument makes the route require authentication: requests
/// without a token are rejected with 401 before the handler runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AuthUser {
    /// User ID
    pub id: i32,
    /// Role carried by the token
    pub role: Role,
}

impl AuthUser {
    /// Returns true for administrators.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Fails with [`AuthError::Forbidden`] unless the user is an administrator.
    pub fn require_admin(&self) -> Result<(), AuthError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            role: claims.role.into(),
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;
        let claims = state.jwt.verify(token)?;

        Ok(claims.into())
    }
}
