//! # API Error Types
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Tally                                  │
//! │                                                                         │
//! │  ingest()      ── ValidationError / ParseError ──┐                      │
//! │  find_by_id()  ── StoreError::NotFound ──────────┼──► ServiceError      │
//! │  cancel token  ── Cancelled ─────────────────────┘         │            │
//! │                                                             ▼            │
//! │                                                         ApiError         │
//! │                                                    { code, message }     │
//! │                                                             │            │
//! │                                                             ▼            │
//! │                                                  HTTP status + JSON      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is retried: parsing and scoring are pure, and `save` cannot fail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tally_core::{CoreError, ParseError, ValidationError};
use tally_store::StoreError;

// =============================================================================
// Service Error
// =============================================================================

/// Failures of the two orchestration operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    /// A required field was missing or the items list was empty.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A present value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No score is stored under the requested identifier.
    #[error(transparent)]
    NotFound(#[from] StoreError),

    /// The caller abandoned the request before it was stored.
    #[error("request cancelled")]
    Cancelled,
}

impl From<CoreError> for ServiceError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(err) => ServiceError::Validation(err),
            CoreError::Parse(err) => ServiceError::Parse(err),
        }
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// API Error
// =============================================================================

/// Error body returned to HTTP clients.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Field: Retailer, Error: required"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Required field missing (400)
    ValidationError,

    /// Malformed timestamp or amount (400)
    ParseError,

    /// Unknown score id (404)
    NotFound,

    /// Request abandoned, e.g. during shutdown (503)
    Cancelled,
}

impl ErrorCode {
    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::ValidationError | ErrorCode::ParseError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let code = match &err {
            ServiceError::Validation(_) => ErrorCode::ValidationError,
            ServiceError::Parse(_) => ErrorCode::ParseError,
            ServiceError::NotFound(_) => ErrorCode::NotFound,
            ServiceError::Cancelled => ErrorCode::Cancelled,
        };
        ApiError::new(code, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Field;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = ServiceError::from(CoreError::from(ValidationError::TooFew {
            field: Field::Items,
            min: 1,
        }))
        .into();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Field: Items, Error: min");
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err: ApiError = ServiceError::from(StoreError::not_found("nope")).into();
        assert_eq!(err.code.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.message, "score not found: nope");
    }

    #[test]
    fn test_cancelled_is_distinct_from_validation() {
        let err: ApiError = ServiceError::Cancelled.into();
        assert_eq!(err.code, ErrorCode::Cancelled);
        assert_eq!(err.code.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_error_body_shape() {
        let err = ApiError::new(ErrorCode::ParseError, "error parsing currency string: abcrf");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "PARSE_ERROR");
        assert_eq!(json["message"], "error parsing currency string: abcrf");
    }
}
