//! HTTP handlers, one module per collection.
//!
//! Request bodies use `Option` fields so a missing or empty value produces
//! the collection's own 400 message rather than a generic deserialization
//! error. The helpers here normalise those fields.

pub mod auth;
pub mod banners;
pub mod classes;
pub mod faqs;
pub mod gallery;
pub mod reviews;

use contentdesk_core::error::CoreError;
use contentdesk_core::ordering::Direction;
use contentdesk_core::types::DbId;
use contentdesk_core::validation::is_image_data_uri;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Message for image fields that are not base64 data URIs.
pub(crate) const INVALID_IMAGE: &str = "Image must be a valid base64-encoded image";

/// Request body for `DELETE /api/<collection>`.
#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub id: Option<DbId>,
}

/// Request body for `PATCH /api/<collection>`.
#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub id: Option<DbId>,
    pub direction: Option<String>,
}

impl DeleteRequest {
    pub(crate) fn require_id(self) -> AppResult<DbId> {
        present_id(self.id).ok_or_else(|| AppError::BadRequest("ID is required".into()))
    }
}

impl MoveRequest {
    /// Both fields present, direction parsed.
    pub(crate) fn require(self) -> AppResult<(DbId, Direction)> {
        let (Some(id), Some(direction)) = (present_id(self.id), present(self.direction)) else {
            return Err(AppError::BadRequest("ID and direction are required".into()));
        };
        let direction: Direction = direction.parse::<Direction>().map_err(AppError::Core)?;
        Ok((id, direction))
    }
}

/// `None` for absent or empty strings.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// `None` for absent or zero ids. Row ids start at 1.
pub(crate) fn present_id(value: Option<DbId>) -> Option<DbId> {
    value.filter(|id| *id != 0)
}

pub(crate) fn require_image(image: &str) -> AppResult<()> {
    if is_image_data_uri(image) {
        Ok(())
    } else {
        Err(AppError::BadRequest(INVALID_IMAGE.into()))
    }
}

/// Integer value of a JSON number. Whole-valued floats such as `4.0` count
/// as integers; fractions, strings and other types do not.
pub(crate) fn json_integer(value: &serde_json::Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .map(|f| f as i64)
}

/// Interpret `isActive` sent either as `0`/`1` or as a boolean.
///
/// Booleans are a deliberate widening: `true`/`false` are stored as `1`/`0`.
/// Strict clients sending integers see no difference.
pub(crate) fn active_flag(value: &serde_json::Value) -> AppResult<i64> {
    match value {
        serde_json::Value::Bool(flag) => Ok(i64::from(*flag)),
        other => json_integer(other).ok_or_else(|| {
            AppError::Core(CoreError::Validation("isActive must be 0 or 1".into()))
        }),
    }
}
