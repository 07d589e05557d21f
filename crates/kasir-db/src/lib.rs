//! # kasir-db: Ledger Store for Kasir
//!
//! SQLite persistence for products and the append-only transaction
//! ledger, using sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir Data Flow                                  │
//! │                                                                         │
//! │  HTTP handler (POST /api/checkout, GET /api/report...)                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     kasir-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │               │    │  (embedded)  │  │   │
//! │  │   │ SqlitePool    │◄───│ ProductRepo   │    │ 001_init.sql │  │   │
//! │  │   │ WAL, FKs,     │    │ CategoryRepo  │    │ 002_append_  │  │   │
//! │  │   │ busy timeout  │    │ LedgerRepo    │    │   only.sql   │  │   │
//! │  │   │               │    │ ReportRepo    │    │ 003_categ... │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (DB_PATH)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Product, category, ledger and report repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kasir_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("kasir.db")).await?;
//! let tx = db.ledger().checkout(&cart).await?;
//! let summary = db.reports().summary(ReportWindow::single_day(today)).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::category::CategoryRepository;
pub use repository::ledger::LedgerRepository;
pub use repository::product::ProductRepository;
pub use repository::report::ReportRepository;
