//! # Money Module
//!
//! Provides the `Money` type for monetary values in the smallest currency
//! unit (e.g. rupiah, cents).
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A ledger must satisfy total == Σ subtotal EXACTLY.                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units, checked arithmetic                  │
//! │    overflow is an error, never a silent wrap                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_minor(25_000);
//! let line = price.checked_mul_quantity(3).unwrap();
//! assert_eq!(line.minor(), 75_000);
//!
//! let total = Money::checked_sum([line, Money::from_minor(5_000)]).unwrap();
//! assert_eq!(total.minor(), 80_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64**: matches SQLite INTEGER, no conversion on read/write
/// - **Transparent serde**: serializes as a bare integer (`80000`)
/// - **Checked math** for anything derived from client input
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(transparent))]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Returns
    /// * `Some(Money)` - the line subtotal
    /// * `None` - the product does not fit in an i64
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Kopi Susu 18000
    /// Quantity: 3
    ///      │
    ///      ▼
    /// checked_mul_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Subtotal: 54000
    /// ```
    #[inline]
    pub const fn checked_mul_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Adds two values, returning `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Money(v)),
            None => None,
        }
    }

    /// Sums an iterator of Money, returning `None` on overflow.
    pub fn checked_sum<I>(values: I) -> Option<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        values
            .into_iter()
            .try_fold(Money::zero(), |acc, v| acc.checked_add(v))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain minor units; presentation belongs to the client.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Money {
    fn from(minor: i64) -> Self {
        Money(minor)
    }
}

/// Addition of two Money values.
///
/// Used for aggregates read back from the store, which already satisfied
/// the checked path on the way in.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(50_000);
        assert_eq!(money.minor(), 50_000);
        assert!(!money.is_zero());
        assert!(Money::zero().is_zero());
        assert!(Money::from_minor(-1).is_negative());
    }

    #[test]
    fn test_checked_mul_quantity() {
        let unit_price = Money::from_minor(2_999);
        assert_eq!(unit_price.checked_mul_quantity(3), Some(Money::from_minor(8_997)));
        assert_eq!(Money::from_minor(i64::MAX).checked_mul_quantity(2), None);
    }

    #[test]
    fn test_checked_sum() {
        let total = Money::checked_sum([
            Money::from_minor(50_000),
            Money::from_minor(30_000),
        ]);
        assert_eq!(total, Some(Money::from_minor(80_000)));

        let overflow = Money::checked_sum([Money::from_minor(i64::MAX), Money::from_minor(1)]);
        assert_eq!(overflow, None);

        assert_eq!(Money::checked_sum(Vec::new()), Some(Money::zero()));
    }

    #[test]
    fn test_sum_and_display() {
        let total: Money = [Money::from_minor(10), Money::from_minor(32)].into_iter().sum();
        assert_eq!(total.to_string(), "42");
    }

    #[test]
    fn test_serializes_as_bare_integer() {
        let json = serde_json::to_string(&Money::from_minor(80_000)).unwrap();
        assert_eq!(json, "80000");

        let back: Money = serde_json::from_str("125").unwrap();
        assert_eq!(back.minor(), 125);
    }
}
