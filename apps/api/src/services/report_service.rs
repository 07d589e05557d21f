//! Report service.
//!
//! Builds the daily and date-range sales reports. The daily report is a
//! one-day window on the current UTC date, so both reports share one
//! aggregation path.

use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};

use kasir_core::{DailySalesReport, DateRangeReport, ReportWindow};
use kasir_db::{Database, DbResult};

/// Report service.
#[derive(Debug, Clone)]
pub struct ReportService {
    db: Database,
}

impl ReportService {
    /// Create a new report service.
    pub fn new(db: Database) -> Self {
        ReportService { db }
    }

    /// Sales for the current UTC calendar date.
    pub async fn today(&self) -> DbResult<DailySalesReport> {
        self.daily(Utc::now().date_naive()).await
    }

    /// Sales for one calendar date.
    pub async fn daily(&self, date: NaiveDate) -> DbResult<DailySalesReport> {
        let summary = self.db.reports().summary(ReportWindow::single_day(date)).await?;
        Ok(DailySalesReport::new(date, summary))
    }

    /// Sales for the inclusive span given by raw query parameters.
    ///
    /// The dates are validated before any query runs.
    pub async fn range(
        &self,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> DbResult<DateRangeReport> {
        let window = ReportWindow::parse(start_date, end_date).inspect_err(|e| {
            warn!(?start_date, ?end_date, error = %e, "Report range rejected");
        })?;

        debug!(start = %window.start(), end = %window.end(), days = window.days(), "Range report");

        let summary = self.db.reports().summary(window).await?;
        Ok(DateRangeReport::new(window.start(), window.end(), summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kasir_core::{Cart, CartLine, CoreError, Money, NewProduct};
    use kasir_db::{DbConfig, DbError};

    async fn setup() -> (Database, ReportService) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let service = ReportService::new(db.clone());
        (db, service)
    }

    async fn sell_now(db: &Database, price: i64) {
        let p = db
            .products()
            .insert(&NewProduct {
                name: format!("Menu {}", price),
                unit_price: Money::from_minor(price),
                stock: 10,
            })
            .await
            .unwrap();
        let cart = Cart::new(vec![CartLine {
            product_id: p.id,
            quantity: 1,
        }])
        .unwrap();
        db.ledger().checkout(&cart).await.unwrap();
    }

    #[tokio::test]
    async fn test_today_totals() {
        let (db, service) = setup().await;
        sell_now(&db, 50_000).await;
        sell_now(&db, 30_000).await;

        let report = service.today().await.unwrap();
        assert_eq!(report.date, Utc::now().date_naive());
        assert_eq!(report.total_revenue, Money::from_minor(80_000));
        assert_eq!(report.total_transactions, 2);
    }

    #[tokio::test]
    async fn test_single_day_range_matches_today() {
        let (db, service) = setup().await;
        sell_now(&db, 12_500).await;
        sell_now(&db, 7_500).await;

        let today = service.today().await.unwrap();
        let date = today.date.to_string();
        let range = service.range(Some(&date), Some(&date)).await.unwrap();

        assert_eq!(range.start_date, today.date);
        assert_eq!(range.end_date, today.date);
        assert_eq!(range.total_revenue, today.total_revenue);
        assert_eq!(range.total_transactions, today.total_transactions);
        assert_eq!(range.best_selling_product, today.best_selling_product);
    }

    #[tokio::test]
    async fn test_empty_day() {
        let (_db, service) = setup().await;
        let report = service.today().await.unwrap();
        assert_eq!(report.total_revenue, Money::zero());
        assert_eq!(report.total_transactions, 0);
        assert!(report.best_selling_product.is_none());
    }

    #[tokio::test]
    async fn test_reversed_range_rejected_without_query() {
        let (db, service) = setup().await;
        db.close().await;

        let err = service
            .range(Some("2026-02-01"), Some("2026-01-01"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Rejected(CoreError::InvalidDateRange { .. })));

        let err = service.range(None, Some("2026-01-01")).await.unwrap_err();
        assert!(matches!(err, DbError::Rejected(CoreError::InvalidDateRange { .. })));

        // A valid range over the closed pool is a storage failure instead.
        let err = service
            .range(Some("2026-01-01"), Some("2026-02-01"))
            .await
            .unwrap_err();
        assert!(err.as_rejection().is_none());
    }
}
