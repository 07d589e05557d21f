//! # Report Windows
//!
//! A report window is an inclusive span of UTC calendar dates. Both the
//! daily report (a one-day window) and the date-range report go through
//! [`ReportWindow`], so they aggregate the ledger identically.
//!
//! ## Why UTC?
//! The window must not depend on the server's local time zone. Every
//! transaction stores the UTC date of its commit timestamp, and windows are
//! compared against that date only.
//!
//! Within a window, the best seller is the product with the highest summed
//! quantity; ties go to the lowest product id.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::validation::parse_report_date;

/// An inclusive `[start, end]` span of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl ReportWindow {
    /// Builds a window, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> CoreResult<Self> {
        if start > end {
            return Err(CoreError::invalid_date_range(format!(
                "start_date {} is after end_date {}",
                start, end
            )));
        }
        Ok(ReportWindow { start, end })
    }

    /// A window covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        ReportWindow {
            start: date,
            end: date,
        }
    }

    /// Parses raw query parameters into a window.
    ///
    /// ## Errors
    /// `CoreError::InvalidDateRange` when a date is missing, not an ISO
    /// `YYYY-MM-DD` date, or `start_date > end_date`.
    pub fn parse(start_date: Option<&str>, end_date: Option<&str>) -> CoreResult<Self> {
        let start = parse_report_date("start_date", start_date)
            .map_err(|e| CoreError::invalid_date_range(e.to_string()))?;
        let end = parse_report_date("end_date", end_date)
            .map_err(|e| CoreError::invalid_date_range(e.to_string()))?;
        ReportWindow::new(start, end)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered (at least 1).
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_parse_valid_range() {
        let window = ReportWindow::parse(Some("2026-01-01"), Some("2026-02-01")).unwrap();
        assert_eq!(window.start(), d(2026, 1, 1));
        assert_eq!(window.end(), d(2026, 2, 1));
        assert_eq!(window.days(), 32);
    }

    #[test]
    fn test_same_day_is_valid() {
        let window = ReportWindow::parse(Some("2026-03-05"), Some("2026-03-05")).unwrap();
        assert_eq!(window, ReportWindow::single_day(d(2026, 3, 5)));
        assert_eq!(window.days(), 1);
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = ReportWindow::parse(Some("2026-02-01"), Some("2026-01-01")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_missing_or_malformed_rejected() {
        let cases = [
            (None, Some("2026-01-01")),
            (Some("2026-01-01"), None),
            (Some(""), Some("2026-01-01")),
            (Some("01/01/2026"), Some("2026-01-02")),
            (Some("2026-01-01"), Some("2026-13-01")),
            (Some("2026-02-30"), Some("2026-03-01")),
        ];
        for (start, end) in cases {
            let err = ReportWindow::parse(start, end).unwrap_err();
            assert!(
                matches!(err, CoreError::InvalidDateRange { .. }),
                "{start:?}..{end:?} gave {err:?}"
            );
        }
    }
}
