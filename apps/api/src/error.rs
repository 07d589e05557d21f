//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kasir                                  │
//! │                                                                         │
//! │  Handler → Result<T, ApiError>                                         │
//! │       │                                                                 │
//! │       ├── CoreError (cart, dates)        ─┐                            │
//! │       ├── DbError::Rejected(CoreError)   ─┼──► ApiError ──► HTTP       │
//! │       └── DbError (storage)              ─┘    (status + JSON body)    │
//! │                                                                         │
//! │  Client receives:                                                      │
//! │    409 {"code":"INSUFFICIENT_STOCK","message":"Insufficient stock..."} │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage details never reach the client: they are logged and replaced by
//! a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use kasir_core::CoreError;
use kasir_db::DbError;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// API error returned from handlers.
///
/// ```json
/// {
///   "code": "PRODUCT_NOT_FOUND",
///   "message": "Product not found: 42"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Empty cart, bad quantity, malformed body (400)
    InvalidCart,

    /// Missing, malformed or reversed report dates (400)
    InvalidDateRange,

    /// Cart references an unknown product (404)
    ProductNotFound,

    /// Not enough stock for a cart line (409)
    InsufficientStock,

    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Resource is still referenced, e.g. a product with recorded sales (409)
    Conflict,

    /// Database operation failed (500)
    StorageFailure,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::InvalidCart | ErrorCode::InvalidDateRange | ErrorCode::ValidationError => {
                StatusCode::BAD_REQUEST
            }
            ErrorCode::ProductNotFound | ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::InsufficientStock | ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::StorageFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an invalid cart error.
    pub fn invalid_cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::InvalidCart, message)
    }

    /// Creates a storage failure with a generic message.
    pub fn storage(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::StorageFailure, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::InvalidCart { .. } => ApiError::new(ErrorCode::InvalidCart, message),
            CoreError::ProductNotFound(_) => ApiError::new(ErrorCode::ProductNotFound, message),
            CoreError::InsufficientStock { .. } => {
                ApiError::new(ErrorCode::InsufficientStock, message)
            }
            CoreError::InvalidDateRange { .. } => {
                ApiError::new(ErrorCode::InvalidDateRange, message)
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Rejected(e) => e.into(),
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::UniqueViolation { field, value } => {
                ApiError::validation(format!("{} '{}' already exists", field, value))
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::storage("Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::storage("Database migration failed")
            }
            DbError::QueryFailed(e) => {
                tracing::error!("Database query failed: {}", e);
                ApiError::storage("Database operation failed")
            }
            DbError::TransactionFailed(e) => {
                tracing::error!("Transaction failed: {}", e);
                ApiError::storage("Database transaction failed")
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!("Foreign key violation: {}", message);
                ApiError::new(
                    ErrorCode::Conflict,
                    "Resource is still referenced by recorded transactions",
                )
            }
            DbError::PoolExhausted => {
                tracing::error!("Database pool exhausted");
                ApiError::storage("Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::storage("Database operation failed")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (CoreError::invalid_cart("empty"), StatusCode::BAD_REQUEST),
            (CoreError::invalid_date_range("reversed"), StatusCode::BAD_REQUEST),
            (CoreError::ProductNotFound(7), StatusCode::NOT_FOUND),
            (
                CoreError::InsufficientStock {
                    product_id: 7,
                    name: "Kopi".to_string(),
                    available: 4,
                    requested: 6,
                },
                StatusCode::CONFLICT,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).code.status(), status);
        }
    }

    #[test]
    fn test_rejection_keeps_its_code() {
        let api: ApiError = DbError::Rejected(CoreError::ProductNotFound(3)).into();
        assert_eq!(api.code, ErrorCode::ProductNotFound);
    }

    #[test]
    fn test_storage_details_hidden() {
        let api: ApiError = DbError::QueryFailed("disk I/O error at page 9".to_string()).into();
        assert_eq!(api.code, ErrorCode::StorageFailure);
        assert!(!api.message.contains("page 9"));
        assert_eq!(api.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_foreign_key_violation_is_conflict() {
        let api: ApiError = DbError::ForeignKeyViolation {
            message: "FOREIGN KEY constraint failed".to_string(),
        }
        .into();
        assert_eq!(api.code, ErrorCode::Conflict);
        assert_eq!(api.code.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::invalid_cart("cart must contain at least one item"))
            .unwrap();
        assert_eq!(json["code"], "INVALID_CART");
        assert_eq!(json["message"], "cart must contain at least one item");
    }
}
