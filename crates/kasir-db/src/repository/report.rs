//! # Report Repository
//!
//! Aggregates committed transactions over a [`ReportWindow`].
//!
//! Both queries run inside one read transaction, so revenue, count and the
//! best seller all describe the same snapshot of the ledger even while
//! checkouts are committing.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use kasir_core::{BestSellingProduct, Money, ReportWindow, SalesSummary};

/// Repository for report aggregation queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

#[derive(Debug, sqlx::FromRow)]
struct Totals {
    total_revenue: Money,
    total_transactions: i64,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Summarizes every transaction whose business date lies in `window`
    /// (both ends inclusive).
    ///
    /// An empty window yields zero revenue, zero transactions and no best
    /// seller. Ties for best seller go to the lowest product id.
    pub async fn summary(&self, window: ReportWindow) -> DbResult<SalesSummary> {
        debug!(start = %window.start(), end = %window.end(), "Aggregating sales");

        let mut tx = self.pool.begin().await?;

        let totals: Totals = sqlx::query_as(
            r#"
            SELECT
                COALESCE(SUM(total_amount), 0) AS total_revenue,
                COUNT(*)                       AS total_transactions
            FROM transactions
            WHERE business_date BETWEEN ?1 AND ?2
            "#,
        )
        .bind(window.start())
        .bind(window.end())
        .fetch_one(&mut *tx)
        .await?;

        let best_selling_product: Option<BestSellingProduct> = sqlx::query_as(
            r#"
            SELECT
                td.product_id       AS product_id,
                p.name              AS name,
                SUM(td.quantity)    AS qty_sold
            FROM transaction_details td
            JOIN transactions t ON t.id = td.transaction_id
            JOIN products p     ON p.id = td.product_id
            WHERE t.business_date BETWEEN ?1 AND ?2
            GROUP BY td.product_id, p.name
            ORDER BY qty_sold DESC, td.product_id ASC
            LIMIT 1
            "#,
        )
        .bind(window.start())
        .bind(window.end())
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(SalesSummary {
            total_revenue: totals.total_revenue,
            total_transactions: totals.total_transactions,
            best_selling_product,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use kasir_core::{Cart, CartLine, NewProduct};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn at(d: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, hour, 30, 0).unwrap()
    }

    async fn product(db: &Database, name: &str, price: i64) -> i64 {
        db.products()
            .insert(&NewProduct {
                name: name.to_string(),
                unit_price: Money::from_minor(price),
                stock: 1_000,
            })
            .await
            .unwrap()
            .id
    }

    async fn sell(db: &Database, when: DateTime<Utc>, lines: &[(i64, i64)]) {
        let cart = Cart::new(
            lines
                .iter()
                .map(|&(product_id, quantity)| CartLine {
                    product_id,
                    quantity,
                })
                .collect(),
        )
        .unwrap();
        db.ledger().checkout_at(&cart, when).await.unwrap();
    }

    #[tokio::test]
    async fn test_empty_window() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let summary = db.reports().summary(ReportWindow::single_day(day(1))).await.unwrap();

        assert_eq!(summary, SalesSummary::default());
        assert!(summary.best_selling_product.is_none());
    }

    #[tokio::test]
    async fn test_revenue_and_count() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let a = product(&db, "Paket Nasi", 50_000).await;
        let b = product(&db, "Paket Mie", 30_000).await;

        sell(&db, at(10, 9), &[(a, 1)]).await;
        sell(&db, at(10, 18), &[(b, 1)]).await;

        let summary = db.reports().summary(ReportWindow::single_day(day(10))).await.unwrap();
        assert_eq!(summary.total_revenue, Money::from_minor(80_000));
        assert_eq!(summary.total_transactions, 2);
    }

    #[tokio::test]
    async fn test_window_bounds_are_inclusive_utc_dates() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let a = product(&db, "Es Jeruk", 7_000).await;

        // 00:00:00 and 23:59:59 UTC both belong to their own day.
        let start_of_day = Utc.with_ymd_and_hms(2026, 3, 5, 0, 0, 0).unwrap();
        let end_of_day = Utc.with_ymd_and_hms(2026, 3, 5, 23, 59, 59).unwrap();
        sell(&db, start_of_day, &[(a, 1)]).await;
        sell(&db, end_of_day, &[(a, 1)]).await;
        sell(&db, at(4, 23), &[(a, 1)]).await;
        sell(&db, at(6, 0), &[(a, 1)]).await;

        let only_fifth = db.reports().summary(ReportWindow::single_day(day(5))).await.unwrap();
        assert_eq!(only_fifth.total_transactions, 2);

        let span = ReportWindow::new(day(4), day(6)).unwrap();
        assert_eq!(db.reports().summary(span).await.unwrap().total_transactions, 4);
    }

    #[tokio::test]
    async fn test_adjacent_windows_add_up() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let a = product(&db, "Soto", 22_000).await;
        let b = product(&db, "Rawon", 27_500).await;

        sell(&db, at(1, 8), &[(a, 2)]).await;
        sell(&db, at(2, 12), &[(b, 1), (a, 1)]).await;
        sell(&db, at(3, 19), &[(b, 3)]).await;
        sell(&db, at(3, 20), &[(a, 1)]).await;
        sell(&db, at(5, 7), &[(b, 1)]).await;

        let reports = db.reports();
        let left = reports.summary(ReportWindow::new(day(1), day(2)).unwrap()).await.unwrap();
        let right = reports.summary(ReportWindow::new(day(3), day(5)).unwrap()).await.unwrap();
        let whole = reports.summary(ReportWindow::new(day(1), day(5)).unwrap()).await.unwrap();

        assert_eq!(whole.total_revenue, left.total_revenue + right.total_revenue);
        assert_eq!(
            whole.total_transactions,
            left.total_transactions + right.total_transactions
        );
        assert_eq!(whole.total_transactions, 5);
    }

    #[tokio::test]
    async fn test_best_seller_by_quantity() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let cheap = product(&db, "Kerupuk", 1_000).await;
        let pricey = product(&db, "Rendang", 45_000).await;

        // Revenue favours Rendang, quantity favours Kerupuk.
        sell(&db, at(8, 10), &[(pricey, 2), (cheap, 3)]).await;
        sell(&db, at(8, 11), &[(cheap, 2)]).await;

        let summary = db.reports().summary(ReportWindow::single_day(day(8))).await.unwrap();
        let best = summary.best_selling_product.unwrap();
        assert_eq!(best.product_id, cheap);
        assert_eq!(best.name, "Kerupuk");
        assert_eq!(best.qty_sold, 5);
    }

    #[tokio::test]
    async fn test_best_seller_tie_goes_to_lowest_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let first = product(&db, "Zebra Cake", 9_000).await;
        let second = product(&db, "Apel", 9_000).await;

        sell(&db, at(9, 10), &[(second, 4)]).await;
        sell(&db, at(9, 11), &[(first, 4)]).await;

        let summary = db.reports().summary(ReportWindow::single_day(day(9))).await.unwrap();
        assert_eq!(summary.best_selling_product.unwrap().product_id, first.min(second));
    }
}
