//! `GET /health`

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub database: bool,
}

/// Liveness. Always answers; `database` reports whether a query succeeds.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        message: "API Running",
        database: state.db.health_check().await,
    })
}
