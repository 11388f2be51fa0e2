//! Field-level validation rules for content entities.
//!
//! Repositories run these before touching storage and handlers run them to
//! reject bad input with a 400 before a connection is borrowed. Messages are
//! shown verbatim to operators.

use crate::error::CoreError;

/// Every stored image (class image, gallery image, banner gif) is a base64
/// data URI with this prefix.
pub const IMAGE_DATA_PREFIX: &str = "data:image/";

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Fail with `message` unless every value is non-empty.
pub fn require_non_empty(values: &[&str], message: &str) -> Result<(), CoreError> {
    if values.iter().any(|v| v.is_empty()) {
        return Err(CoreError::Validation(message.to_string()));
    }
    Ok(())
}

pub fn validate_rating(rating: i64) -> Result<(), CoreError> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CoreError::Validation(format!(
            "Rating must be an integer between {MIN_RATING} and {MAX_RATING}"
        )));
    }
    Ok(())
}

/// `isActive` is stored as an integer flag.
pub fn validate_active_flag(is_active: i64) -> Result<(), CoreError> {
    if is_active != 0 && is_active != 1 {
        return Err(CoreError::Validation("isActive must be 0 or 1".to_string()));
    }
    Ok(())
}

pub fn is_image_data_uri(value: &str) -> bool {
    value.starts_with(IMAGE_DATA_PREFIX)
}

pub fn validate_image_data_uri(value: &str) -> Result<(), CoreError> {
    if !is_image_data_uri(value) {
        return Err(CoreError::Validation(
            "Image must be a valid base64-encoded image (data:image/*;base64,...)".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.trim().is_empty() {
        return Err(CoreError::Validation("Email must not be empty".to_string()));
    }
    if !email.contains('@') {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}
