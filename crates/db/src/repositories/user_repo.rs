//! Repository for the `users` table.

use contentdesk_core::error::CoreError;
use contentdesk_core::validation::validate_email;
use sqlx::SqlitePool;

use crate::error::RepoResult;
use crate::models::user::User;

const COLUMNS: &str = "id, email, name";

/// Provides persistence for operators who have signed in.
pub struct UserRepo;

impl UserRepo {
    pub async fn create(pool: &SqlitePool, email: &str, name: Option<&str>) -> RepoResult<User> {
        validate_email(email)?;

        let query = format!("INSERT INTO users (email, name) VALUES (?, ?) RETURNING {COLUMNS}");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(name)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::Internal("Failed to get last insert row ID".into()))?;

        tracing::info!(user_id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE email = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Look the user up by email, inserting a row on first sign-in.
    ///
    /// A concurrent insert of the same email is absorbed by the conflict
    /// clause and the existing row is returned.
    pub async fn find_or_create(
        pool: &SqlitePool,
        email: &str,
        name: Option<&str>,
    ) -> RepoResult<User> {
        if let Some(user) = Self::find_by_email(pool, email).await? {
            return Ok(user);
        }

        validate_email(email)?;
        sqlx::query("INSERT INTO users (email, name) VALUES (?, ?) ON CONFLICT(email) DO NOTHING")
            .bind(email)
            .bind(name)
            .execute(pool)
            .await?;

        let user = Self::find_by_email(pool, email)
            .await?
            .ok_or_else(|| CoreError::Internal(format!("User {email} vanished after insert")))?;
        tracing::info!(user_id = user.id, email = %user.email, "Registered user on first sign-in");
        Ok(user)
    }
}
