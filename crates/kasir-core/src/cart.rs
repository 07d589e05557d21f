//! # Cart
//!
//! The client-supplied list of product/quantity pairs, and the pure pricing
//! math applied to it during checkout.
//!
//! ## Checkout Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Vec<CartLine> (raw request)                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cart::new() ← non-empty, every quantity > 0                           │
//! │       │                                                                 │
//! │       ▼  (inside the store transaction)                                │
//! │  PricedLine::new(product snapshot, qty) ← subtotal = qty × unit_price │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart_total(&[PricedLine]) ← total = Σ subtotal                        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Cart` can only be obtained through [`Cart::new`], so the store layer
//! never sees an empty cart or a non-positive quantity.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::validation::validate_quantity;

/// One requested line: a product and how many units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: i64,
    pub quantity: i64,
}

/// A validated, ordered, non-empty cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Validates raw lines into a cart.
    ///
    /// ## Errors
    /// * `CoreError::InvalidCart` - no lines, or a line with quantity <= 0
    pub fn new(lines: Vec<CartLine>) -> CoreResult<Self> {
        if lines.is_empty() {
            return Err(CoreError::invalid_cart("cart must contain at least one item"));
        }

        for (index, line) in lines.iter().enumerate() {
            validate_quantity(line.quantity).map_err(|e| {
                CoreError::invalid_cart(format!("item {} (product {}): {}", index, line.product_id, e))
            })?;
        }

        Ok(Cart { lines })
    }

    /// Lines in submission order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines, saturating at `i64::MAX`.
    pub fn total_quantity(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |total, l| total.saturating_add(l.quantity))
    }
}

// =============================================================================
// Pricing
// =============================================================================

/// A cart line priced against the product row read inside the checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedLine {
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub subtotal: Money,
}

impl PricedLine {
    /// Prices one line: `subtotal = quantity × unit_price`.
    ///
    /// ## Errors
    /// * `CoreError::InvalidCart` - the subtotal overflows
    pub fn new(
        product_id: i64,
        product_name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
    ) -> CoreResult<Self> {
        let subtotal = unit_price.checked_mul_quantity(quantity).ok_or_else(|| {
            CoreError::invalid_cart(format!("subtotal for product {} overflows", product_id))
        })?;

        Ok(PricedLine {
            product_id,
            product_name: product_name.into(),
            unit_price,
            quantity,
            subtotal,
        })
    }
}

/// Total of a priced cart.
///
/// ## Errors
/// * `CoreError::InvalidCart` - the total overflows
pub fn cart_total(lines: &[PricedLine]) -> CoreResult<Money> {
    Money::checked_sum(lines.iter().map(|l| l.subtotal))
        .ok_or_else(|| CoreError::invalid_cart("cart total overflows"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: i64, quantity: i64) -> CartLine {
        CartLine {
            product_id,
            quantity,
        }
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = Cart::new(vec![]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCart { .. }));
    }

    #[test]
    fn test_non_positive_quantity_rejected() {
        for qty in [0, -1, i64::MIN] {
            let err = Cart::new(vec![line(1, 2), line(2, qty)]).unwrap_err();
            match err {
                CoreError::InvalidCart { reason } => assert!(reason.contains("item 1")),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn test_cart_preserves_order_and_duplicates() {
        let cart = Cart::new(vec![line(3, 1), line(1, 2), line(3, 4)]).unwrap();
        let ids: Vec<i64> = cart.lines().iter().map(|l| l.product_id).collect();
        assert_eq!(ids, vec![3, 1, 3]);
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.total_quantity(), 7);
    }

    #[test]
    fn test_total_quantity_saturates() {
        let cart = Cart::new(vec![line(1, i64::MAX), line(2, i64::MAX)]).unwrap();
        assert_eq!(cart.total_quantity(), i64::MAX);
    }

    #[test]
    fn test_priced_line_subtotal() {
        let priced = PricedLine::new(1, "Teh Botol", Money::from_minor(5_000), 3).unwrap();
        assert_eq!(priced.subtotal, Money::from_minor(15_000));
    }

    #[test]
    fn test_priced_line_overflow() {
        let err = PricedLine::new(1, "Gold", Money::from_minor(i64::MAX / 2 + 1), 2).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCart { .. }));
    }

    #[test]
    fn test_cart_total_is_exact_sum() {
        // Arbitrary cart sizes, odd prices: no rounding anywhere.
        for size in [1usize, 2, 7, 50] {
            let lines: Vec<PricedLine> = (0..size)
                .map(|i| {
                    let price = Money::from_minor(999 + i as i64 * 13);
                    PricedLine::new(i as i64, format!("P{}", i), price, (i % 5 + 1) as i64).unwrap()
                })
                .collect();

            let expected: i64 = lines.iter().map(|l| l.unit_price.minor() * l.quantity).sum();
            assert_eq!(cart_total(&lines).unwrap().minor(), expected);
        }
    }

    #[test]
    fn test_cart_total_overflow() {
        let a = PricedLine::new(1, "A", Money::from_minor(i64::MAX), 1).unwrap();
        let b = PricedLine::new(2, "B", Money::from_minor(1), 1).unwrap();
        assert!(cart_total(&[a, b]).is_err());
    }

    #[test]
    fn test_cart_line_deserializes() {
        let line: CartLine = serde_json::from_str(r#"{"product_id": 5, "quantity": 2}"#).unwrap();
        assert_eq!(line, CartLine { product_id: 5, quantity: 2 });
    }
}
