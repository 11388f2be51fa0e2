//! Row structs and input DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` struct matching the row as returned by the
//!   repository (camelCase on the wire, derived flags such as `isHtml`
//!   computed in SQL)
//! - An input struct carrying the editable fields, validated before any
//!   statement runs

pub mod banner;
pub mod class;
pub mod faq;
pub mod gallery_image;
pub mod review;
pub mod user;
