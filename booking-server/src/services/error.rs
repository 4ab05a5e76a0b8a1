//! Service-layer error type
//!
//! Every core operation returns [`ServiceResult`]. Each variant carries the
//! [`ErrorCode`] that tells an API client exactly why the call failed; the
//! variant itself is the coarse taxonomy callers match on.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::repository::RepoError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or rule-breaking input
    #[error("{1}")]
    Validation(ErrorCode, String),

    /// Referenced restaurant, table or reservation is absent
    #[error("{1}")]
    NotFound(ErrorCode, String),

    /// Slot already held, duplicate table number, or table still booked
    #[error("{1}")]
    Conflict(ErrorCode, String),

    /// Illegal status transition or edit of a closed reservation
    #[error("{1}")]
    InvalidState(ErrorCode, String),

    /// Storage failure; details are logged, never returned to clients
    #[error("Database error: {0}")]
    Database(String),
}

impl ServiceError {
    pub fn validation(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::Validation(code, msg.into())
    }

    pub fn not_found(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::NotFound(code, msg.into())
    }

    pub fn conflict(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::Conflict(code, msg.into())
    }

    pub fn invalid_state(code: ErrorCode, msg: impl Into<String>) -> Self {
        Self::InvalidState(code, msg.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation(code, _)
            | Self::NotFound(code, _)
            | Self::Conflict(code, _)
            | Self::InvalidState(code, _) => *code,
            Self::Database(_) => ErrorCode::DatabaseError,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => ServiceError::NotFound(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => ServiceError::Conflict(ErrorCode::AlreadyExists, msg),
            RepoError::Validation(msg) => {
                ServiceError::Validation(ErrorCode::ValidationFailed, msg)
            }
            RepoError::Database(msg) => ServiceError::Database(msg),
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Database(msg) => {
                tracing::error!(error = %msg, "Service database error");
                AppError::new(ErrorCode::DatabaseError)
            }
            ServiceError::Validation(code, msg)
            | ServiceError::NotFound(code, msg)
            | ServiceError::Conflict(code, msg)
            | ServiceError::InvalidState(code, msg) => AppError::with_message(code, msg),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;

    #[test]
    fn test_repo_duplicate_becomes_conflict() {
        let err: ServiceError = RepoError::Duplicate("dup".into()).into();
        assert!(matches!(err, ServiceError::Conflict(ErrorCode::AlreadyExists, _)));
    }

    #[test]
    fn test_database_details_not_exposed() {
        let app: AppError = ServiceError::Database("disk I/O error at page 42".into()).into();
        assert_eq!(app.code, ErrorCode::DatabaseError);
        assert!(!app.message.contains("page 42"));
        assert_eq!(app.http_status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_code_and_status_survive_conversion() {
        let err = ServiceError::conflict(ErrorCode::TableAlreadyReserved, "Table 7 is taken");
        assert_eq!(err.code(), ErrorCode::TableAlreadyReserved);

        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::TableAlreadyReserved);
        assert_eq!(app.message, "Table 7 is taken");
        assert_eq!(app.http_status(), StatusCode::CONFLICT);
    }
}
