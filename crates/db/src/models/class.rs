use contentdesk_core::error::CoreError;
use contentdesk_core::types::{DbId, Position};
use contentdesk_core::validation::{
    require_non_empty, validate_active_flag, validate_image_data_uri,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `classes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub url: String,
    /// Base64 data URI.
    pub image: String,
    #[sqlx(rename = "isActive")]
    pub is_active: i64,
    pub position: Position,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassInput {
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub is_active: i64,
}

impl ClassInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty(
            &[&self.name, &self.description, &self.url, &self.image],
            "All class fields must not be empty",
        )?;
        validate_active_flag(self.is_active)?;
        validate_image_data_uri(&self.image)
    }
}
