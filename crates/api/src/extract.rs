//! Request body extractor with the API's error shape.

use axum::extract::FromRequest;

use crate::error::AppError;

/// Drop-in replacement for [`axum::Json`] whose rejection renders as a 400
/// `{ "error": ... }` body instead of axum's plain-text rejection.
///
/// Wrong field types (for example a fractional `rating`) and invalid JSON
/// are rejected here, before the handler runs.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
