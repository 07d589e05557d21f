//! # kasir-core: Pure Business Logic for Kasir
//!
//! The domain heart of the Kasir point-of-sale backend. Everything here is a
//! pure function or a plain data type; the database and HTTP layers build
//! on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kasir Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (apps/api, axum)                    │   │
//! │  │    POST /api/checkout   GET /api/report/today   GET /api/report │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kasir-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  report   │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  Window   │  │   │
//! │  │   │  Ledger   │  │  checked  │  │ PricedLine│  │  (UTC)    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO CLOCK                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    kasir-db (Ledger Store)                      │   │
//! │  │        SQLite, migrations, atomic checkout, report queries      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Transaction, reports)
//! - [`money`] - Integer money with checked arithmetic
//! - [`cart`] - Cart validation and line pricing
//! - [`report`] - Report windows (inclusive UTC date spans)
//! - [`error`] - Domain error types
//! - [`validation`] - Field validation
//!
//! ## Example Usage
//!
//! ```rust
//! use kasir_core::{Cart, CartLine, CoreError};
//!
//! let cart = Cart::new(vec![CartLine { product_id: 1, quantity: 2 }]).unwrap();
//! assert_eq!(cart.len(), 1);
//!
//! let err = Cart::new(vec![]).unwrap_err();
//! assert!(matches!(err, CoreError::InvalidCart { .. }));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod report;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{cart_total, Cart, CartLine, PricedLine};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use report::ReportWindow;
pub use types::*;
