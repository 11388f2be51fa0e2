use std::sync::Arc;

use crate::auth::access::AdminAccess;
use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: contentdesk_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Operator credential check and e-mail allow-list, built once at startup.
    pub access: Arc<AdminAccess>,
}
