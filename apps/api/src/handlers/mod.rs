//! HTTP handlers, one module per endpoint group.

pub mod category;
pub mod checkout;
pub mod health;
pub mod product;
pub mod report;
pub mod transaction;
