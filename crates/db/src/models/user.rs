use contentdesk_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `users` table. Operators are recorded here the first time
/// they sign in.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub name: Option<String>,
}
