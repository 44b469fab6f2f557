use sea_orm::DatabaseConnection;

use crate::server::{service::chat::hub::ChatHub, util::jwt::JwtKeys};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Token signing and verification keys
    pub jwt: JwtKeys,
    /// Realtime chat connection registry
    pub hub: ChatHub,
}
