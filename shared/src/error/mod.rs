//! Unified error system for the booking service
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Restaurant errors
//! - 2xxx: Table errors
//! - 3xxx: Reservation errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::TableAlreadyReserved);
//!
//! let err = AppError::with_message(ErrorCode::InsufficientCapacity, "Party of 6 at a 4-top")
//!     .with_detail("capacity", 4);
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(3005));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
