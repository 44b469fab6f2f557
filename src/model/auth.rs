use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterDto {
    pub email: String,
    pub username: String,
    pub password: String,
    pub full_name: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Returned by register and login
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// Bearer token to send in the `Authorization` header
    pub token: String,
    pub user: UserDto,
}
