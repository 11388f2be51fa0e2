//! Startup schema management.
//!
//! Tables are created with `CREATE TABLE IF NOT EXISTS`, then older
//! databases are brought forward with additive `ALTER TABLE` migrations.
//! Every migration checks `pragma_table_info` first, so running
//! [`ensure_schema`] against an up-to-date database writes nothing.
//!
//! A migration that fails is logged and recorded in the returned
//! [`MigrationReport`]; the remaining tables are still migrated.

use sqlx::SqlitePool;

const CREATE_TABLES: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS faqs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT NOT NULL,
        answer TEXT NOT NULL,
        position INTEGER DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS banners (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        subtitle TEXT NOT NULL,
        message TEXT NOT NULL,
        gif TEXT
    )",
    "CREATE TABLE IF NOT EXISTS reviews (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        review TEXT NOT NULL,
        rating INTEGER NOT NULL,
        date TEXT NOT NULL,
        position INTEGER DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS classes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        description TEXT NOT NULL,
        url TEXT NOT NULL,
        image TEXT NOT NULL,
        isActive INTEGER NOT NULL,
        position INTEGER DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS gallery_images (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        image TEXT NOT NULL,
        filename TEXT NOT NULL,
        position INTEGER DEFAULT 0
    )",
    "CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        name TEXT
    )",
];

/// Tables whose rows carry a `position` column.
pub const POSITIONED_TABLES: &[&str] = &["faqs", "reviews", "classes", "gallery_images"];

/// Outcome of a single [`ensure_schema`] run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    /// Human-readable names of migrations that ran, e.g. `"faqs.position"`.
    pub applied: Vec<String>,
    /// Migrations that failed, with the error message.
    pub failed: Vec<(String, String)>,
}

impl MigrationReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Create missing tables and apply pending column migrations.
///
/// Table creation failures are fatal. Column migrations are isolated per
/// table.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<MigrationReport, sqlx::Error> {
    for ddl in CREATE_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }

    let mut report = MigrationReport::default();

    for &table in POSITIONED_TABLES {
        record(&mut report, table, "position", add_position_column(pool, table).await);
    }
    record(&mut report, "banners", "gif", add_gif_column(pool).await);

    tracing::info!(
        applied = report.applied.len(),
        failed = report.failed.len(),
        "Database schema ready",
    );
    Ok(report)
}

fn record(
    report: &mut MigrationReport,
    table: &str,
    column: &str,
    result: Result<bool, sqlx::Error>,
) {
    let name = format!("{table}.{column}");
    match result {
        Ok(true) => {
            tracing::info!(migration = %name, "Applied schema migration");
            report.applied.push(name);
        }
        Ok(false) => {}
        Err(e) => {
            tracing::warn!(migration = %name, error = %e, "Schema migration failed, skipping");
            report.failed.push((name, e.to_string()));
        }
    }
}

/// Column names of `table`, in declaration order.
pub async fn column_names(pool: &SqlitePool, table: &str) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar("SELECT name FROM pragma_table_info(?) ORDER BY cid")
        .bind(table)
        .fetch_all(pool)
        .await
}

async fn has_column(pool: &SqlitePool, table: &str, column: &str) -> Result<bool, sqlx::Error> {
    Ok(column_names(pool, table)
        .await?
        .iter()
        .any(|name| name == column))
}

/// Add `position` to `table` and backfill it from ascending id order.
///
/// Returns `Ok(false)` when the column already exists.
async fn add_position_column(pool: &SqlitePool, table: &str) -> Result<bool, sqlx::Error> {
    if has_column(pool, table, "position").await? {
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    sqlx::query(&format!(
        "ALTER TABLE {table} ADD COLUMN position INTEGER DEFAULT 0"
    ))
    .execute(&mut *tx)
    .await?;
    // Rank each row by id; ids are unique so the result is dense.
    sqlx::query(&format!(
        "UPDATE {table} SET position = \
         (SELECT COUNT(*) FROM {table} AS earlier WHERE earlier.id < {table}.id)"
    ))
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;

    Ok(true)
}

async fn add_gif_column(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    if has_column(pool, "banners", "gif").await? {
        return Ok(false);
    }
    sqlx::query("ALTER TABLE banners ADD COLUMN gif TEXT")
        .execute(pool)
        .await?;
    Ok(true)
}
