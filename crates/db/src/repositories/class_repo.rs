//! Repository for the `classes` table.

use contentdesk_core::error::CoreError;
use contentdesk_core::ordering::{Direction, GapPolicy, MoveOutcome};
use contentdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::RepoResult;
use crate::models::class::{Class, ClassInput};
use crate::repositories::position::{self, PositionedTable};

const COLUMNS: &str = "id, name, description, url, image, isActive, position";

/// Provides CRUD and reordering for classes.
pub struct ClassRepo;

impl PositionedTable for ClassRepo {
    const TABLE: &'static str = "classes";
    const ENTITY: &'static str = "class";
}

impl ClassRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY position ASC, id ASC");
        sqlx::query_as::<_, Class>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes WHERE id = ?");
        sqlx::query_as::<_, Class>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &SqlitePool, input: &ClassInput) -> RepoResult<Class> {
        input.validate()?;

        let query = format!(
            "INSERT INTO classes (name, description, url, image, isActive, position) \
             VALUES (?, ?, ?, ?, ?, {}) \
             RETURNING {COLUMNS}",
            position::next_position_expr::<Self>()
        );
        let class = sqlx::query_as::<_, Class>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.image)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::Internal("Failed to get last insert row ID".into()))?;

        tracing::debug!(
            class_id = class.id,
            position = class.position,
            image_len = input.image.len(),
            "Created class",
        );
        Ok(class)
    }

    pub async fn update(pool: &SqlitePool, id: DbId, input: &ClassInput) -> RepoResult<Class> {
        input.validate()?;

        let query = format!(
            "UPDATE classes SET name = ?, description = ?, url = ?, image = ?, isActive = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let class = sqlx::query_as::<_, Class>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.url)
            .bind(&input.image)
            .bind(input.is_active)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: Self::ENTITY,
                id,
            })?;
        Ok(class)
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
