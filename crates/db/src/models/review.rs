use contentdesk_core::error::CoreError;
use contentdesk_core::types::{DbId, Position};
use contentdesk_core::validation::{require_non_empty, validate_rating};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    pub name: String,
    pub review: String,
    pub rating: i64,
    /// Free-form date string as entered by the operator.
    pub date: String,
    pub position: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewInput {
    pub name: String,
    pub review: String,
    pub rating: i64,
    pub date: String,
}

impl ReviewInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty(
            &[&self.name, &self.review, &self.date],
            "All review fields must not be empty",
        )?;
        validate_rating(self.rating)
    }
}
