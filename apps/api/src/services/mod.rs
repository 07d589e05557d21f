//! Service layer.
//!
//! Services own the business flow for each endpoint group and return
//! `DbResult`; handlers only translate HTTP in and out.

pub mod checkout_service;
pub mod report_service;

pub use checkout_service::CheckoutService;
pub use report_service::ReportService;
