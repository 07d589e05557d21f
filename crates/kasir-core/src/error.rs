//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                         │
//! │  ├── CoreError        - Checkout / report rejections                   │
//! │  └── ValidationError  - Field-level input failures                     │
//! │                                                                         │
//! │  kasir-db errors (separate crate)                                      │
//! │  └── DbError          - Storage failures, or Rejected(CoreError)       │
//! │                                                                         │
//! │  HTTP errors (in apps/api)                                             │
//! │  └── ApiError         - What the client sees (status + code)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → DbError → ApiError → Client       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of the `CoreError` variants are transient: retrying the same input
//! yields the same rejection.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business rule violations raised by checkout and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The cart cannot be checked out as submitted.
    ///
    /// ## When This Occurs
    /// - Cart has no lines
    /// - A line has a zero or negative quantity
    /// - A line subtotal or the cart total overflows
    /// - The request body is not a cart at all
    #[error("Invalid cart: {reason}")]
    InvalidCart { reason: String },

    /// A cart line references a product id that does not exist.
    #[error("Product not found: {0}")]
    ProductNotFound(i64),

    /// Not enough stock to cover the requested quantity.
    ///
    /// ## User Workflow
    /// ```text
    /// Checkout { product 7, qty: 6 }
    ///      │
    ///      ▼
    /// Guarded decrement: stock=4
    ///      │
    ///      ▼
    /// InsufficientStock { product_id: 7, available: 4, requested: 6 }
    ///      │
    ///      ▼
    /// Client shows: "Only 4 Kopi Susu in stock"
    /// ```
    #[error("Insufficient stock for {name} (id {product_id}): available {available}, requested {requested}")]
    InsufficientStock {
        product_id: i64,
        name: String,
        available: i64,
        requested: i64,
    },

    /// A report window could not be built from the supplied dates.
    #[error("Invalid date range: {reason}")]
    InvalidDateRange { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an InvalidCart error.
    pub fn invalid_cart(reason: impl Into<String>) -> Self {
        CoreError::InvalidCart {
            reason: reason.into(),
        }
    }

    /// Creates an InvalidDateRange error.
    pub fn invalid_date_range(reason: impl Into<String>) -> Self {
        CoreError::InvalidDateRange {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early, field-level validation before any business logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., invalid date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            product_id: 7,
            name: "Kopi Susu".to_string(),
            available: 4,
            requested: 6,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for Kopi Susu (id 7): available 4, requested 6"
        );

        assert_eq!(
            CoreError::ProductNotFound(42).to_string(),
            "Product not found: 42"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
