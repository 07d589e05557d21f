//! # Repository Module
//!
//! Database repository implementations for Kasir.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Service / Handler                                                     │
//! │       │                                                                 │
//! │       │  db.ledger().checkout(&cart)                                    │
//! │       ▼                                                                 │
//! │  LedgerRepository                                                      │
//! │  ├── checkout(&self, cart)          one SQLite transaction             │
//! │  ├── checkout_at(&self, cart, at)                                      │
//! │  └── get_transaction(&self, id)                                        │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product master data
//! - [`CategoryRepository`](category::CategoryRepository) - Catalogue categories
//! - [`LedgerRepository`](ledger::LedgerRepository) - Atomic checkout, ledger reads
//! - [`ReportRepository`](report::ReportRepository) - Window aggregates

pub mod category;
pub mod ledger;
pub mod product;
pub mod report;
