use contentdesk_core::error::CoreError;

/// Error returned by repository operations that validate input or require
/// the targeted row to exist.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Validation, not-found and storage-shape failures.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The underlying SQLite call failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepoResult<T> = Result<T, RepoError>;
