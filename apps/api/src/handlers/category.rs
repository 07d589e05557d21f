//! Category endpoints.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use kasir_core::{Category, NewCategory};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

fn path_id(id: Result<Path<i64>, PathRejection>) -> ApiResult<i64> {
    let Path(id) = id.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    Ok(id)
}

fn body(payload: Result<Json<NewCategory>, JsonRejection>) -> ApiResult<NewCategory> {
    let Json(category) = payload.map_err(|rejection| ApiError::validation(rejection.body_text()))?;
    Ok(category)
}

/// `GET /api/categories`
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Category>>> {
    Ok(Json(state.db.categories().list().await?))
}

/// `GET /api/categories/{id}`
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Category>> {
    let id = path_id(id)?;

    state
        .db
        .categories()
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Category", id))
}

/// `POST /api/categories`
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewCategory>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Category>)> {
    let category = state.db.categories().insert(&body(payload)?).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// `PUT /api/categories/{id}`
pub async fn update(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<NewCategory>, JsonRejection>,
) -> ApiResult<Json<Category>> {
    let id = path_id(id)?;
    let category = state.db.categories().update(id, &body(payload)?).await?;
    Ok(Json(category))
}

/// `DELETE /api/categories/{id}`
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    state.db.categories().delete(path_id(id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}
