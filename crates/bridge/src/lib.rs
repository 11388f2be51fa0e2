//! Server-side action bridge for the contentdesk REST API.
//!
//! Admin screens call these actions instead of issuing HTTP requests
//! themselves. Every action reports its outcome as an [`ActionResult`]:
//! `{ "success": true, "data": ... }` or `{ "success": false, "error": ... }`.
//! Errors are never raised to the caller.

pub mod client;
pub mod collection;
pub mod error;
pub mod result;

pub use client::ActionClient;
pub use collection::Collection;
pub use error::BridgeError;
pub use result::ActionResult;
