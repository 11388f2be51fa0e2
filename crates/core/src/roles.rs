//! Well-known role name constants.
//!
//! Tokens issued by the credentials login carry [`ROLE_ADMIN`].

pub const ROLE_ADMIN: &str = "admin";
