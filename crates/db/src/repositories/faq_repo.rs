//! Repository for the `faqs` table.

use contentdesk_core::error::CoreError;
use contentdesk_core::ordering::{Direction, GapPolicy, MoveOutcome};
use contentdesk_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::RepoResult;
use crate::models::faq::{Faq, FaqInput};
use crate::repositories::position::{self, PositionedTable};

/// Column list shared across queries. `is_html` is derived from the answer.
const COLUMNS: &str = "id, question, answer, (instr(answer, '<') > 0) AS is_html, position";

/// Provides CRUD and reordering for FAQs.
pub struct FaqRepo;

impl PositionedTable for FaqRepo {
    const TABLE: &'static str = "faqs";
    const ENTITY: &'static str = "FAQ";
}

impl FaqRepo {
    /// List all FAQs in display order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs ORDER BY position ASC, id ASC");
        sqlx::query_as::<_, Faq>(&query).fetch_all(pool).await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Faq>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faqs WHERE id = ?");
        sqlx::query_as::<_, Faq>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Append a new FAQ at the end of the list.
    pub async fn create(pool: &SqlitePool, input: &FaqInput) -> RepoResult<Faq> {
        input.validate()?;

        let query = format!(
            "INSERT INTO faqs (question, answer, position) \
             VALUES (?, ?, {}) \
             RETURNING {COLUMNS}",
            position::next_position_expr::<Self>()
        );
        let faq = sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| CoreError::Internal("Failed to get last insert row ID".into()))?;

        tracing::debug!(faq_id = faq.id, position = faq.position, "Created FAQ");
        Ok(faq)
    }

    /// Replace question and answer. Position is left untouched.
    pub async fn update(pool: &SqlitePool, id: DbId, input: &FaqInput) -> RepoResult<Faq> {
        input.validate()?;

        let query = format!(
            "UPDATE faqs SET question = ?, answer = ? WHERE id = ? RETURNING {COLUMNS}"
        );
        let faq = sqlx::query_as::<_, Faq>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or(CoreError::NotFound {
                entity: Self::ENTITY,
                id,
            })?;
        Ok(faq)
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
