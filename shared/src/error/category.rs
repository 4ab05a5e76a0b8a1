//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Restaurant errors
/// - 2xxx: Table errors
/// - 3xxx: Reservation errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Restaurant errors (1xxx)
    Restaurant,
    /// Table errors (2xxx)
    Table,
    /// Reservation errors (3xxx)
    Reservation,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Restaurant,
            2000..3000 => Self::Table,
            3000..4000 => Self::Reservation,
            4000..9000 => Self::General,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Restaurant => "restaurant",
            Self::Table => "table",
            Self::Reservation => "reservation",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Restaurant);
        assert_eq!(ErrorCategory::from_code(2003), ErrorCategory::Table);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::Reservation);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::RestaurantNotFound.category(),
            ErrorCategory::Restaurant
        );
        assert_eq!(ErrorCode::TableDisabled.category(), ErrorCategory::Table);
        assert_eq!(
            ErrorCode::TableAlreadyReserved.category(),
            ErrorCategory::Reservation
        );
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Reservation).unwrap();
        assert_eq!(json, "\"reservation\"");

        let category: ErrorCategory = serde_json::from_str("\"system\"").unwrap();
        assert_eq!(category, ErrorCategory::System);
    }
}
