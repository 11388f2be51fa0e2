use contentdesk_core::error::CoreError;
use contentdesk_core::types::{DbId, Position};
use contentdesk_core::validation::require_non_empty;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `faqs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    /// True when the answer contains markup and should be rendered as HTML.
    pub is_html: bool,
    pub position: Position,
}

/// Editable FAQ fields, used for both create and update.
#[derive(Debug, Clone, Deserialize)]
pub struct FaqInput {
    pub question: String,
    pub answer: String,
}

impl FaqInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty(
            &[&self.question, &self.answer],
            "Question and answer must not be empty",
        )
    }
}
