//! # Domain Types
//!
//! Core domain types shared by the store and the HTTP layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    Product      │   │  Transaction    │   │ TransactionDetail   │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id             │   │  id (monotonic) │   │  transaction_id     │   │
//! │  │  name           │◄──┼──────────────── │◄──│  product_id         │   │
//! │  │  unit_price     │   │  created_at     │   │  quantity           │   │
//! │  │  stock          │   │  total_amount   │   │  subtotal           │   │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────────┘   │
//! │                                                                         │
//! │  Invariant: total_amount == Σ subtotal (exact)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `Category` is standalone master data; products do not reference it.
//!
//! Ledger rows (`Transaction`, `TransactionDetail`) are append-only: created
//! once by checkout, never updated or deleted.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique, stable identifier.
    pub id: i64,

    /// Display name shown to the cashier and on reports.
    pub name: String,

    /// Price per unit in minor currency units.
    pub unit_price: Money,

    /// Units currently on hand. Never negative.
    pub stock: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a product, or replacing one with `PUT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub unit_price: Money,
    pub stock: i64,
}

// =============================================================================
// Category
// =============================================================================

/// A product grouping for the catalogue (Makanan, Minuman, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or replacing a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

// =============================================================================
// Transaction
// =============================================================================

/// A committed sale.
///
/// `business_date` is the UTC calendar date of `created_at`. Report windows
/// are expressed in these dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Transaction {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub business_date: NaiveDate,
    pub total_amount: Money,
    /// Line items, in cart order.
    #[cfg_attr(feature = "sqlx", sqlx(skip))]
    pub details: Vec<TransactionDetail>,
}

impl Transaction {
    /// Sum of line subtotals. Equal to `total_amount` for every committed
    /// transaction.
    pub fn details_total(&self) -> Money {
        self.details.iter().map(|d| d.subtotal).sum()
    }
}

// =============================================================================
// Transaction Detail
// =============================================================================

/// A line item in a transaction.
/// Uses snapshot pattern to freeze product name and price at time of sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct TransactionDetail {
    pub id: i64,
    pub transaction_id: i64,
    pub product_id: i64,
    /// Product name at time of sale (frozen).
    pub product_name: String,
    /// Unit price at time of sale (frozen).
    pub unit_price: Money,
    pub quantity: i64,
    /// quantity × unit_price
    pub subtotal: Money,
}

// =============================================================================
// Reports
// =============================================================================

/// The product with the highest summed quantity in a report window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BestSellingProduct {
    pub product_id: i64,
    pub name: String,
    pub qty_sold: i64,
}

/// Aggregates over one report window, as read from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_revenue: Money,
    pub total_transactions: i64,
    pub best_selling_product: Option<BestSellingProduct>,
}

/// Sales for a single calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySalesReport {
    pub date: NaiveDate,
    pub total_revenue: Money,
    pub total_transactions: i64,
    pub best_selling_product: Option<BestSellingProduct>,
}

impl DailySalesReport {
    pub fn new(date: NaiveDate, summary: SalesSummary) -> Self {
        DailySalesReport {
            date,
            total_revenue: summary.total_revenue,
            total_transactions: summary.total_transactions,
            best_selling_product: summary.best_selling_product,
        }
    }
}

/// Sales for an inclusive span of calendar days (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRangeReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_revenue: Money,
    pub total_transactions: i64,
    pub best_selling_product: Option<BestSellingProduct>,
}

impl DateRangeReport {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate, summary: SalesSummary) -> Self {
        DateRangeReport {
            start_date,
            end_date,
            total_revenue: summary.total_revenue,
            total_transactions: summary.total_transactions,
            best_selling_product: summary.best_selling_product,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_total() {
        let now = Utc::now();
        let detail = |id, subtotal| TransactionDetail {
            id,
            transaction_id: 1,
            product_id: id,
            product_name: format!("P{}", id),
            unit_price: Money::from_minor(subtotal),
            quantity: 1,
            subtotal: Money::from_minor(subtotal),
        };
        let tx = Transaction {
            id: 1,
            created_at: now,
            business_date: now.date_naive(),
            total_amount: Money::from_minor(80_000),
            details: vec![detail(1, 50_000), detail(2, 30_000)],
        };
        assert_eq!(tx.details_total(), tx.total_amount);
    }

    #[test]
    fn test_new_category_description_optional() {
        let category: NewCategory = serde_json::from_str(r#"{"name": "Minuman"}"#).unwrap();
        assert_eq!(category.name, "Minuman");
        assert_eq!(category.description, "");
    }

    #[test]
    fn test_empty_summary_has_no_best_seller() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let report = DailySalesReport::new(date, SalesSummary::default());
        assert_eq!(report.total_revenue, Money::zero());
        assert_eq!(report.total_transactions, 0);
        assert!(report.best_selling_product.is_none());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["best_selling_product"], serde_json::Value::Null);
        assert_eq!(json["date"], "2026-01-15");
    }
}
