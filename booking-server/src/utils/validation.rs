//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement.

use shared::error::ErrorCode;

use crate::services::error::{ServiceError, ServiceResult};

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: restaurant
pub const MAX_NAME_LEN: usize = 200;

/// Special requests on a reservation
pub const MAX_NOTE_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(
            ErrorCode::RequiredField,
            format!("{field} must not be empty"),
        ));
    }
    if value.chars().count() > max_len {
        return Err(ServiceError::validation(
            ErrorCode::ValueOutOfRange,
            format!(
                "{field} is too long ({} chars, max {max_len})",
                value.chars().count()
            ),
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> ServiceResult<()> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(ServiceError::validation(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({} chars, max {max_len})", v.chars().count()),
        ));
    }
    Ok(())
}

/// Validate a strictly positive integer (capacity, party size, table number)
pub fn validate_positive(value: i32, field: &str) -> ServiceResult<()> {
    if value <= 0 {
        return Err(ServiceError::validation(
            ErrorCode::ValueOutOfRange,
            format!("{field} must be positive, got {value}"),
        ));
    }
    Ok(())
}
