//! # kasir-api: HTTP API for Kasir
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/checkout             → 201 Transaction                      │
//! │  GET  /api/report/today         → DailySalesReport (UTC date)          │
//! │  GET  /api/report/hari-ini      → same as /api/report/today            │
//! │  GET  /api/report?start_date=&end_date=  → DateRangeReport             │
//! │  GET  /api/products             → [Product]                            │
//! │  POST /api/products             → 201 Product                          │
//! │  GET  /api/products/{id}        → Product                              │
//! │  PUT  /api/products/{id}        → Product                              │
//! │  DELETE /api/products/{id}      → 204 (409 once sold)                  │
//! │  GET/POST /api/categories       → [Category] / 201 Category            │
//! │  GET/PUT/DELETE /api/categories/{id}                                   │
//! │  GET  /api/transactions/{id}    → Transaction                          │
//! │  GET  /health                   → {"status":"OK",...}                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod services;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use kasir_db::Database;

use crate::services::{CheckoutService, ReportService};

/// Shared application state.
///
/// Every field is a cheap handle over the same connection pool.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub checkout: CheckoutService,
    pub reports: ReportService,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        AppState {
            checkout: CheckoutService::new(db.clone()),
            reports: ReportService::new(db.clone()),
            db,
        }
    }
}

/// CORS policy: any origin, the usual REST verbs, JSON and bearer headers.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/checkout", post(handlers::checkout::checkout))
        .route("/report", get(handlers::report::range))
        .route("/report/today", get(handlers::report::today))
        .route("/report/hari-ini", get(handlers::report::today))
        .route(
            "/products",
            get(handlers::product::list).post(handlers::product::create),
        )
        .route(
            "/products/{id}",
            get(handlers::product::get)
                .put(handlers::product::update)
                .delete(handlers::product::delete),
        )
        .route(
            "/categories",
            get(handlers::category::list).post(handlers::category::create),
        )
        .route(
            "/categories/{id}",
            get(handlers::category::get)
                .put(handlers::category::update)
                .delete(handlers::category::delete),
        )
        .route("/transactions/{id}", get(handlers::transaction::get));

    Router::new()
        .nest("/api", api)
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

// =============================================================================
// Router Tests
// =============================================================================
