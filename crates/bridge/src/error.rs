use crate::collection::Collection;

/// Errors from the action bridge.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// The HTTP request itself failed (connection refused, timeout, bad body).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API Error: {status} - {body}")]
    Api {
        status: u16,
        /// Raw response body, usually the `{error, details?}` JSON.
        body: String,
    },

    /// A 2xx response whose body lacked an expected field.
    #[error("Unexpected API response: {0}")]
    InvalidResponse(String),

    /// The action does not apply to the collection. No request was sent.
    #[error("{collection} cannot be reordered")]
    NotReorderable { collection: Collection },
}
