//! Unified error codes for the booking service
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Restaurant errors
//! - 2xxx: Table errors
//! - 3xxx: Reservation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Restaurant ====================
    /// Restaurant not found
    RestaurantNotFound = 1001,

    // ==================== 2xxx: Table ====================
    /// Table not found
    TableNotFound = 2001,
    /// Table number already used in this restaurant
    TableNumberExists = 2002,
    /// Table still has pending/confirmed reservations today or later
    TableHasFutureReservations = 2003,
    /// Table is disabled and cannot be booked
    TableDisabled = 2004,
    /// Table belongs to another restaurant
    TableNotInRestaurant = 2005,

    // ==================== 3xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 3001,
    /// Table already reserved for this slot
    TableAlreadyReserved = 3002,
    /// Status transition not allowed by the lifecycle
    InvalidStatusTransition = 3003,
    /// Reservation is cancelled/completed and can no longer be edited
    ReservationNotEditable = 3004,
    /// Party does not fit the table
    InsufficientCapacity = 3005,
    /// Time slot is not a valid HH:MM label
    InvalidTimeSlot = 3006,
    /// Reservation date is before today
    ReservationInPast = 3007,
    /// date_from is after date_to
    InvalidDateRange = 3008,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Restaurant
            ErrorCode::RestaurantNotFound => "Restaurant not found",

            // Table
            ErrorCode::TableNotFound => "Table not found",
            ErrorCode::TableNumberExists => "Table number already exists in this restaurant",
            ErrorCode::TableHasFutureReservations => {
                "Cannot delete table with future reservations"
            }
            ErrorCode::TableDisabled => "Table is disabled",
            ErrorCode::TableNotInRestaurant => "Table does not belong to this restaurant",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::TableAlreadyReserved => "Table already reserved",
            ErrorCode::InvalidStatusTransition => "Reservation status transition not allowed",
            ErrorCode::ReservationNotEditable => "Reservation can no longer be modified",
            ErrorCode::InsufficientCapacity => "Party size exceeds table capacity",
            ErrorCode::InvalidTimeSlot => "Invalid reservation time",
            ErrorCode::ReservationInPast => "Reservation date is in the past",
            ErrorCode::InvalidDateRange => "Invalid date range",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Restaurant
            1001 => Ok(ErrorCode::RestaurantNotFound),

            // Table
            2001 => Ok(ErrorCode::TableNotFound),
            2002 => Ok(ErrorCode::TableNumberExists),
            2003 => Ok(ErrorCode::TableHasFutureReservations),
            2004 => Ok(ErrorCode::TableDisabled),
            2005 => Ok(ErrorCode::TableNotInRestaurant),

            // Reservation
            3001 => Ok(ErrorCode::ReservationNotFound),
            3002 => Ok(ErrorCode::TableAlreadyReserved),
            3003 => Ok(ErrorCode::InvalidStatusTransition),
            3004 => Ok(ErrorCode::ReservationNotEditable),
            3005 => Ok(ErrorCode::InsufficientCapacity),
            3006 => Ok(ErrorCode::InvalidTimeSlot),
            3007 => Ok(ErrorCode::ReservationInPast),
            3008 => Ok(ErrorCode::InvalidDateRange),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        // General
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);

        // Restaurant
        assert_eq!(ErrorCode::RestaurantNotFound.code(), 1001);

        // Table
        assert_eq!(ErrorCode::TableNotFound.code(), 2001);
        assert_eq!(ErrorCode::TableNumberExists.code(), 2002);
        assert_eq!(ErrorCode::TableHasFutureReservations.code(), 2003);
        assert_eq!(ErrorCode::TableDisabled.code(), 2004);
        assert_eq!(ErrorCode::TableNotInRestaurant.code(), 2005);

        // Reservation
        assert_eq!(ErrorCode::ReservationNotFound.code(), 3001);
        assert_eq!(ErrorCode::TableAlreadyReserved.code(), 3002);
        assert_eq!(ErrorCode::InvalidStatusTransition.code(), 3003);
        assert_eq!(ErrorCode::ReservationNotEditable.code(), 3004);
        assert_eq!(ErrorCode::InsufficientCapacity.code(), 3005);
        assert_eq!(ErrorCode::InvalidTimeSlot.code(), 3006);
        assert_eq!(ErrorCode::ReservationInPast.code(), 3007);
        assert_eq!(ErrorCode::InvalidDateRange.code(), 3008);

        // System
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
        assert_eq!(ErrorCode::TimeoutError.code(), 9004);
    }

    #[test]
    fn test_try_from_covers_every_code() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::RestaurantNotFound,
            ErrorCode::TableNotFound,
            ErrorCode::TableNumberExists,
            ErrorCode::TableHasFutureReservations,
            ErrorCode::TableDisabled,
            ErrorCode::TableNotInRestaurant,
            ErrorCode::ReservationNotFound,
            ErrorCode::TableAlreadyReserved,
            ErrorCode::InvalidStatusTransition,
            ErrorCode::ReservationNotEditable,
            ErrorCode::InsufficientCapacity,
            ErrorCode::InvalidTimeSlot,
            ErrorCode::ReservationInPast,
            ErrorCode::InvalidDateRange,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::TimeoutError,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4001), Err(InvalidErrorCode(4001)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&ErrorCode::TableAlreadyReserved).unwrap();
        assert_eq!(json, "3002");

        let code: ErrorCode = serde_json::from_str("2003").unwrap();
        assert_eq!(code, ErrorCode::TableHasFutureReservations);

        let result: Result<ErrorCode, _> = serde_json::from_str("999");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ErrorCode::Success), "0");
        assert_eq!(format!("{}", ErrorCode::ReservationNotFound), "3001");
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::TableAlreadyReserved.message(), "Table already reserved");
        assert_eq!(
            ErrorCode::TableHasFutureReservations.message(),
            "Cannot delete table with future reservations"
        );
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }
}
