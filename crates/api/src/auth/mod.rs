//! Authentication and authorization primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`access`] -- the configured operator account and e-mail allow-list.

pub mod access;
pub mod jwt;
pub mod password;
