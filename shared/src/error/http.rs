//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::RestaurantNotFound
            | Self::TableNotFound
            | Self::ReservationNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict (caller may retry with another table/slot)
            Self::AlreadyExists
            | Self::TableNumberExists
            | Self::TableHasFutureReservations
            | Self::TableAlreadyReserved => StatusCode::CONFLICT,

            // 422 Unprocessable Entity (lifecycle violations)
            Self::InvalidStatusTransition | Self::ReservationNotEditable => {
                StatusCode::UNPROCESSABLE_ENTITY
            }

            // 503 Service Unavailable (transient errors, client can retry)
            Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError | Self::Unknown => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (default for validation/business errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
