//! Small shared response bodies.

use serde::Serialize;

/// `{ "message": ... }` body returned by delete and move endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by the renumber repair endpoints.
#[derive(Debug, Serialize)]
pub struct RenumberResponse {
    pub message: String,
    /// Rows whose position changed.
    pub changed: u64,
}
