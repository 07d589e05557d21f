//! # Validation Module
//!
//! Input validation utilities for Kasir.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (serde)                                       │
//! │  └── Type validation (deserialization)                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business rule validation (quantity, dates, names)                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── CHECK (stock >= 0), CHECK (quantity > 0)                          │
//! │  ├── Foreign key constraints                                           │
//! │  └── Append-only triggers on the ledger                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// ISO calendar date format accepted by the report endpoints.
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Longest accepted product name, in bytes after trimming.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Longest accepted category description, in bytes.
pub const MAX_DESCRIPTION_LEN: usize = 1_000;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use kasir_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Kopi Susu Gula Aren").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_name(name)
}

/// Validates a category name. Same rules as product names.
pub fn validate_category_name(name: &str) -> ValidationResult<()> {
    validate_name(name)
}

/// Validates a free-text description (may be empty).
pub fn validate_description(description: &str) -> ValidationResult<()> {
    if description.len() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::TooLong {
            field: "description".to_string(),
            max: MAX_DESCRIPTION_LEN,
        });
    }

    Ok(())
}

fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a cart line quantity: must be strictly positive.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use kasir_core::money::Money;
/// use kasir_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_minor(0)).is_ok());
/// assert!(validate_unit_price(Money::from_minor(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an initial stock level.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::OutOfRange {
            field: "stock".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Date Validators
// =============================================================================

/// Parses a required ISO `YYYY-MM-DD` date parameter.
pub fn parse_report_date(field: &str, value: Option<&str>) -> ValidationResult<NaiveDate> {
    let value = value.map(str::trim).unwrap_or_default();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    NaiveDate::parse_from_str(value, REPORT_DATE_FORMAT).map_err(|_| {
        ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "expected YYYY-MM-DD".to_string(),
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Kopi Susu").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
        assert!(validate_product_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_category_fields() {
        assert!(validate_category_name("Bumbu Dapur").is_ok());
        assert!(validate_category_name("  ").is_err());
        assert!(validate_description("").is_ok());
        assert!(matches!(
            validate_description(&"x".repeat(1_001)),
            Err(ValidationError::TooLong { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(10_000).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_stock() {
        assert!(validate_stock(0).is_ok());
        assert!(validate_stock(-1).is_err());
    }

    #[test]
    fn test_parse_report_date() {
        assert_eq!(
            parse_report_date("start_date", Some(" 2026-01-31 ")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()
        );
        assert!(matches!(
            parse_report_date("start_date", None),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            parse_report_date("end_date", Some("2026-1-31T00:00")),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
