//! The position protocol shared by every ordered collection.
//!
//! A collection opts in by implementing [`PositionedTable`] on its repository
//! struct. The table must have `id INTEGER PRIMARY KEY` and `position
//! INTEGER` columns.
//!
//! Position only changes in three ways:
//! - append on create (`MAX(position) + 1` computed inside the INSERT)
//! - swap on move (one transaction, one UPDATE touching exactly two rows)
//! - shift-down on delete when [`GapPolicy::Compact`] is in effect
//!
//! [`renumber`] is a repair operation for collections that already contain
//! gaps or duplicates.

use contentdesk_core::error::CoreError;
use contentdesk_core::ordering::{Direction, GapPolicy, MoveOutcome};
use contentdesk_core::types::{DbId, Position};
use sqlx::SqlitePool;

use crate::error::RepoResult;

/// Transactions that read positions and then write take the write lock at
/// `BEGIN`. A deferred transaction fails with `SQLITE_BUSY` when it upgrades
/// while another writer holds the lock; an immediate one waits on the busy
/// timeout.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// A table whose rows are ordered by a dense `position` column.
pub trait PositionedTable {
    /// SQL table name.
    const TABLE: &'static str;
    /// Display name used in not-found messages and log lines (e.g. `"FAQ"`).
    const ENTITY: &'static str;
}

/// Scalar subquery yielding the position for a newly appended row.
///
/// Embed it in the `VALUES` list of an INSERT so the read of the current
/// maximum and the write happen in the same statement.
pub fn next_position_expr<T: PositionedTable>() -> String {
    format!(
        "(SELECT COALESCE(MAX(position), -1) + 1 FROM {})",
        T::TABLE
    )
}

/// `(id, position)` pairs in display order.
pub async fn list_positions<T: PositionedTable>(
    pool: &SqlitePool,
) -> Result<Vec<(DbId, Position)>, sqlx::Error> {
    let query = format!(
        "SELECT id, position FROM {} ORDER BY position ASC, id ASC",
        T::TABLE
    );
    sqlx::query_as::<_, (DbId, Position)>(&query)
        .fetch_all(pool)
        .await
}

/// Move a row one step towards the head (`Up`) or tail (`Down`) of the list.
///
/// Moving the first row up or the last row down succeeds without writing
/// anything and reports [`MoveOutcome::AtBoundary`].
pub async fn move_item<T: PositionedTable>(
    pool: &SqlitePool,
    id: DbId,
    direction: Direction,
) -> RepoResult<MoveOutcome> {
    let mut tx = pool.begin_with(BEGIN_WRITE).await?;

    let current: Option<Position> =
        sqlx::query_scalar(&format!("SELECT position FROM {} WHERE id = ?", T::TABLE))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

    let Some(current) = current else {
        return Err(CoreError::NotFound {
            entity: T::ENTITY,
            id,
        }
        .into());
    };

    let target = direction.target(current);

    let displaced: Option<DbId> = sqlx::query_scalar(&format!(
        "SELECT id FROM {} WHERE position = ? AND id <> ? ORDER BY id ASC LIMIT 1",
        T::TABLE
    ))
    .bind(target)
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(displaced_id) = displaced else {
        tx.rollback().await?;
        tracing::debug!(
            entity = T::ENTITY,
            id,
            position = current,
            %direction,
            "No neighbour at target position, move is a no-op",
        );
        return Ok(MoveOutcome::AtBoundary {
            id,
            position: current,
        });
    };

    let swapped = sqlx::query(&format!(
        "UPDATE {} SET position = CASE id WHEN ? THEN ? ELSE ? END WHERE id IN (?, ?)",
        T::TABLE
    ))
    .bind(id)
    .bind(target)
    .bind(current)
    .bind(id)
    .bind(displaced_id)
    .execute(&mut *tx)
    .await?;

    if swapped.rows_affected() != 2 {
        // Dropping the transaction rolls the partial swap back.
        return Err(CoreError::Internal(format!(
            "Swapping {} {id} with {displaced_id} updated {} rows",
            T::ENTITY,
            swapped.rows_affected()
        ))
        .into());
    }

    tx.commit().await?;

    tracing::debug!(
        entity = T::ENTITY,
        id,
        displaced_id,
        from = current,
        to = target,
        "Swapped positions",
    );

    Ok(MoveOutcome::Swapped {
        id,
        displaced_id,
        from: current,
        to: target,
    })
}

/// Delete a row, applying `policy` to the positions of the remaining rows.
pub async fn delete_item<T: PositionedTable>(
    pool: &SqlitePool,
    id: DbId,
    policy: GapPolicy,
) -> RepoResult<()> {
    let not_found = || CoreError::NotFound {
        entity: T::ENTITY,
        id,
    };

    match policy {
        GapPolicy::Keep => {
            let result = sqlx::query(&format!("DELETE FROM {} WHERE id = ?", T::TABLE))
                .bind(id)
                .execute(pool)
                .await?;
            if result.rows_affected() == 0 {
                return Err(not_found().into());
            }
        }
        GapPolicy::Compact => {
            let mut tx = pool.begin_with(BEGIN_WRITE).await?;

            let removed: Option<Position> = sqlx::query_scalar(&format!(
                "DELETE FROM {} WHERE id = ? RETURNING position",
                T::TABLE
            ))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

            let Some(removed) = removed else {
                return Err(not_found().into());
            };

            let shifted = sqlx::query(&format!(
                "UPDATE {} SET position = position - 1 WHERE position > ?",
                T::TABLE
            ))
            .bind(removed)
            .execute(&mut *tx)
            .await?;

            tx.commit().await?;

            tracing::debug!(
                entity = T::ENTITY,
                id,
                position = removed,
                shifted = shifted.rows_affected(),
                "Compacted positions after delete",
            );
        }
    }

    Ok(())
}

/// Reassign positions `0..N` following the current display order.
///
/// Returns the number of rows whose position changed.
pub async fn renumber<T: PositionedTable>(pool: &SqlitePool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin_with(BEGIN_WRITE).await?;

    let rows = sqlx::query_as::<_, (DbId, Position)>(&format!(
        "SELECT id, position FROM {} ORDER BY position ASC, id ASC",
        T::TABLE
    ))
    .fetch_all(&mut *tx)
    .await?;

    let update = format!("UPDATE {} SET position = ? WHERE id = ?", T::TABLE);
    let mut changed = 0;
    for (index, (id, position)) in rows.into_iter().enumerate() {
        let index = index as Position;
        if position != index {
            sqlx::query(&update)
                .bind(index)
                .bind(id)
                .execute(&mut *tx)
                .await?;
            changed += 1;
        }
    }

    tx.commit().await?;

    if changed > 0 {
        tracing::info!(entity = T::ENTITY, changed, "Renumbered positions");
    }
    Ok(changed)
}
