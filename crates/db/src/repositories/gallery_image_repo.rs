//! Repository for the `gallery_images` table.

use contentdesk_core::error::CoreError;
use contentdesk_core::ordering::{Direction, GapPolicy, MoveOutcome};
use contentdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::RepoResult;
use crate::models::gallery_image::{GalleryImage, GalleryImageInput};
use crate::repositories::position::{self, PositionedTable};

const COLUMNS: &str = "id, image, filename, position";

/// Provides CRUD and reordering for gallery images.
pub struct GalleryImageRepo;

impl PositionedTable for GalleryImageRepo {
    const TABLE: &'static str = "gallery_images";
    const ENTITY: &'static str = "gallery image";
}

impl GalleryImageRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_images ORDER BY position ASC, id ASC");
        sqlx::query_as::<_, GalleryImage>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery_images WHERE id = ?");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &SqlitePool, input: &GalleryImageInput) -> RepoResult<GalleryImage> {
        input.validate()?;

        let query = format!(
            "INSERT INTO gallery_images (image, filename, position) \
             VALUES (?, ?, {}) \
             RETURNING {COLUMNS}",
            position::next_position_expr::<Self>()
        );
        let image = sqlx::query_as::<_, GalleryImage>(&query)
            .bind(&input.image)
            .bind(&input.filename)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::Internal("Failed to get last insert row ID".into()))?;

        tracing::debug!(
            image_id = image.id,
            filename = %image.filename,
            position = image.position,
            "Created gallery image",
        );
        Ok(image)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &GalleryImageInput,
    ) -> RepoResult<GalleryImage> {
        input.validate()?;

        let query = format!(
            "UPDATE gallery_images SET image = ?, filename = ? WHERE id = ? RETURNING {COLUMNS}"
        );
        let image = sqlx::query_as::<_, GalleryImage>(&query)
            .bind(&input.image)
            .bind(&input.filename)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: Self::ENTITY,
                id,
            })?;
        Ok(image)
    }

    pub async fn delete(pool: &SqlitePool, id: DbId, policy: GapPolicy) -> RepoResult<()> {
        position::delete_item::<Self>(pool, id, policy).await
    }

    pub async fn move_position(
        pool: &SqlitePool,
        id: DbId,
        direction: Direction,
    ) -> RepoResult<MoveOutcome> {
        position::move_item::<Self>(pool, id, direction).await
    }
}
