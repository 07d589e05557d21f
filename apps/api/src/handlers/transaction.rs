//! `GET /api/transactions/{id}`

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;

use kasir_core::Transaction;

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// A committed transaction with its line items.
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Transaction>> {
    let Path(id) = id.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    state
        .db
        .ledger()
        .get_transaction(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Transaction", id))
}
