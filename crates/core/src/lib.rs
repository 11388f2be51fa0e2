//! Domain primitives shared by the storage and HTTP layers.
//!
//! Nothing in this crate performs I/O: it holds the error taxonomy, the
//! ordering vocabulary used by positioned collections, and the field-level
//! validation rules applied by both repositories and handlers.

pub mod error;
pub mod ordering;
pub mod roles;
pub mod types;
pub mod validation;
