use contentdesk_core::error::CoreError;
use contentdesk_core::types::{DbId, Position};
use contentdesk_core::validation::{require_non_empty, validate_image_data_uri};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `gallery_images` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: DbId,
    /// Base64 data URI.
    pub image: String,
    pub filename: String,
    pub position: Position,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GalleryImageInput {
    pub image: String,
    pub filename: String,
}

impl GalleryImageInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty(
            &[&self.image, &self.filename],
            "Image and filename must not be empty",
        )?;
        validate_image_data_uri(&self.image)
    }
}
