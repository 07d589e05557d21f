//! Product master data endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use kasir_core::{NewProduct, Product};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// `GET /api/products`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.db.products().list().await?))
}

/// `GET /api/products/{id}`
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    state
        .db
        .products()
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product", id))
}

/// `POST /api/products`
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(new) = payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    let product = state.db.products().insert(&new).await?;
    info!(product_id = product.id, name = %product.name, stock = product.stock, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// `PUT /api/products/{id}`
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    let Json(update) = payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    let product = state.db.products().update(id, &update).await?;
    info!(product_id = product.id, stock = product.stock, "Product updated");

    Ok(Json(product))
}

/// `DELETE /api/products/{id}`
///
/// Refused with 409 once the product appears in a recorded transaction.
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    state.db.products().delete(id).await?;
    info!(product_id = id, "Product deleted");

    Ok(StatusCode::NO_CONTENT)
}
