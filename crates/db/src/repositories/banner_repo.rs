//! Repository for the `banners` table.
//!
//! Banners have no position column and are listed in id order.

use contentdesk_core::error::CoreError;
use contentdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::RepoResult;
use crate::models::banner::{Banner, BannerInput};

const COLUMNS: &str = "id, title, subtitle, message, \
    (instr(title, '<') > 0 OR instr(subtitle, '<') > 0 OR instr(message, '<') > 0) AS is_html, \
    gif";

const ENTITY: &str = "banner";

/// Provides CRUD operations for banners.
pub struct BannerRepo;

impl BannerRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners ORDER BY id ASC");
        sqlx::query_as::<_, Banner>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners WHERE id = ?");
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &SqlitePool, input: &BannerInput) -> RepoResult<Banner> {
        input.validate()?;

        let query = format!(
            "INSERT INTO banners (title, subtitle, message, gif) \
             VALUES (?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        let banner = sqlx::query_as::<_, Banner>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.message)
            .bind(input.stored_gif())
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::Internal("Failed to get last insert row ID".into()))?;

        tracing::debug!(
            banner_id = banner.id,
            has_gif = banner.gif.is_some(),
            "Created banner",
        );
        Ok(banner)
    }

    /// Replace every field, including the gif. Omitting the gif clears it.
    pub async fn update(pool: &SqlitePool, id: DbId, input: &BannerInput) -> RepoResult<Banner> {
        input.validate()?;

        let query = format!(
            "UPDATE banners SET title = ?, subtitle = ?, message = ?, gif = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let banner = sqlx::query_as::<_, Banner>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.message)
            .bind(input.stored_gif())
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
        Ok(banner)
    }

    pub async fn delete(pool: &SqlitePool, id: DbId) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM banners WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound { entity: ENTITY, id }.into());
        }
        Ok(())
    }
}
