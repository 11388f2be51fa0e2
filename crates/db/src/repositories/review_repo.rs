//! Repository for the `reviews` table.

use contentdesk_core::error::CoreError;
use contentdesk_core::ordering::{Direction, GapPolicy, MoveOutcome};
use contentdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::RepoResult;
use crate::models::review::{Review, ReviewInput};
use crate::repositories::position::{self, PositionedTable};

const COLUMNS: &str = "id, name, review, rating, date, position";

/// Provides CRUD and reordering for customer reviews.
pub struct ReviewRepo;

impl PositionedTable for ReviewRepo {
    const TABLE: &'static str = "reviews";
    const ENTITY: &'static str = "review";
}

impl ReviewRepo {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews ORDER BY position ASC, id ASC");
        let reviews = sqlx::query_as::<_, Review>(&query).fetch_all(pool).await?;
        tracing::debug!(count = reviews.len(), "Fetched reviews");
        Ok(reviews)
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = ?");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &SqlitePool, input: &ReviewInput) -> RepoResult<Review> {
        input.validate()?;

        let query = format!(
            "INSERT INTO reviews (name, review, rating, date, position) \
             VALUES (?, ?, ?, ?, {}) \
             RETURNING {COLUMNS}",
            position::next_position_expr::<Self>()
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(&input.name)
            .bind(&input.review)
            .bind(input.rating)
            .bind(&input.date)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::Internal("Failed to get last insert row ID".into()))?;

        tracing::debug!(review_id = review.id, position = review.position, "Created review");
        Ok(review)
    }

    pub async fn update(pool: &SqlitePool, id: DbId, input: &ReviewInput) -> RepoResult<Review> {
        input.validate()?;

        let query = format!(
            "UPDATE reviews SET name = ?, review = ?, rating = ?, date = ? \
             WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(&input.name)
            .bind(&input.review)
            .bind(input.rating)
            .bind(&input.date)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: Self::ENTITY,
                id,
            })?;
        Ok(review)
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
