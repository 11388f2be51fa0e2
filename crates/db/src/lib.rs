//! SQLite persistence for content collections.
//!
//! - [`schema`] -- startup table creation and additive self-migration.
//! - [`models`] -- row structs and input DTOs.
//! - [`repositories`] -- zero-sized repository structs plus the shared
//!   position protocol used by every ordered collection.

use sqlx::sqlite::SqlitePoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod schema;

pub type DbPool = sqlx::SqlitePool;

/// Create a connection pool from a database URL.
///
/// Use a file URL such as `sqlite://contentdesk.db?mode=rwc`. An in-memory
/// URL gives every pooled connection its own empty database.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create missing tables and apply pending additive migrations.
pub async fn bootstrap(pool: &DbPool) -> Result<schema::MigrationReport, sqlx::Error> {
    schema::ensure_schema(pool).await
}
