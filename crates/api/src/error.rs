use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contentdesk_core::error::CoreError;
use contentdesk_db::error::RepoError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "error": ..., "details"?: ... }`
/// bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `contentdesk_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A repository call failed while performing `action`
    /// (e.g. `"Failed to delete faq"`).
    #[error("{action}: {source}")]
    Operation {
        action: &'static str,
        source: RepoError,
    },

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Build a `map_err` adapter labelling a repository failure with `action`.
    ///
    /// ```ignore
    /// FaqRepo::list(&state.pool).await.map_err(AppError::op("Failed to fetch faqs"))?;
    /// ```
    pub fn op<E: Into<RepoError>>(action: &'static str) -> impl FnOnce(E) -> Self {
        move |err| AppError::Operation {
            action,
            source: err.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details) = match &self {
            AppError::Core(core) => classify_core(core, None),
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                internal()
            }
            AppError::Operation { action, source } => match source {
                RepoError::Core(core) => classify_core(core, Some(*action)),
                RepoError::Database(err) => {
                    tracing::error!(action, error = %err, "Storage operation failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        action.to_string(),
                        Some(source.to_string()),
                    )
                }
            },
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = match details {
            Some(details) => json!({ "error": message, "details": details }),
            None => json!({ "error": message }),
        };

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, String, Option<String>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "An internal error occurred".to_string(),
        None,
    )
}

/// Map a domain error to status, message and optional details.
///
/// Not-found is reported as a 500: callers of the content API treat any
/// failed mutation on a missing row as a server-side failure.
fn classify_core(
    core: &CoreError,
    action: Option<&'static str>,
) -> (StatusCode, String, Option<String>) {
    match core {
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg.clone(), None),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone(), None),
        CoreError::NotFound { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            action.unwrap_or("Resource not found").to_string(),
            Some(core.to_string()),
        ),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            match action {
                Some(action) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    action.to_string(),
                    Some(msg.clone()),
                ),
                None => internal(),
            }
        }
    }
}
