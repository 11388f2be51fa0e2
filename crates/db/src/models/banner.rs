//! Banners are the one collection without a position column; they display in
//! insertion (id) order.

use contentdesk_core::error::CoreError;
use contentdesk_core::types::DbId;
use contentdesk_core::validation::{require_non_empty, validate_image_data_uri};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `banners` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: DbId,
    pub title: String,
    pub subtitle: String,
    pub message: String,
    /// True when any of title, subtitle or message contains markup.
    pub is_html: bool,
    /// Optional animated image as a base64 data URI.
    pub gif: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannerInput {
    pub title: String,
    pub subtitle: String,
    pub message: String,
    pub gif: Option<String>,
}

impl BannerInput {
    pub fn validate(&self) -> Result<(), CoreError> {
        require_non_empty(
            &[&self.title, &self.subtitle, &self.message],
            "Title, subtitle, and message must not be empty",
        )?;
        match self.gif.as_deref() {
            Some(gif) if !gif.is_empty() => validate_image_data_uri(gif),
            _ => Ok(()),
        }
    }

    /// The gif as stored: an empty string is treated as no gif.
    pub fn stored_gif(&self) -> Option<&str> {
        self.gif.as_deref().filter(|g| !g.is_empty())
    }
}
