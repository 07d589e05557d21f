//! `POST /api/checkout`

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use kasir_core::{CartLine, Transaction};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Checkout request body.
///
/// ```json
/// { "items": [ { "product_id": 1, "quantity": 2 } ] }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartLine>,
}

/// Records a sale. A body that is not a valid cart is an `INVALID_CART`.
pub async fn checkout(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Transaction>)> {
    let Json(request) = payload.map_err(|rejection| ApiError::invalid_cart(rejection.body_text()))?;

    let transaction = state.checkout.checkout(request.items).await?;

    Ok((StatusCode::CREATED, Json(transaction)))
}
