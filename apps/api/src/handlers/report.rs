//! Sales report endpoints.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use kasir_core::{CoreError, DailySalesReport, DateRangeReport};

use crate::error::ApiResult;
use crate::AppState;

/// `?start_date=YYYY-MM-DD&end_date=YYYY-MM-DD`
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// `GET /api/report/today` (alias `/api/report/hari-ini`)
pub async fn today(State(state): State<AppState>) -> ApiResult<Json<DailySalesReport>> {
    Ok(Json(state.reports.today().await?))
}

/// `GET /api/report?start_date=&end_date=`
pub async fn range(
    State(state): State<AppState>,
    query: Result<Query<RangeQuery>, QueryRejection>,
) -> ApiResult<Json<DateRangeReport>> {
    let Query(query) = query.map_err(|rejection| CoreError::invalid_date_range(rejection.body_text()))?;

    let report = state
        .reports
        .range(query.start_date.as_deref(), query.end_date.as_deref())
        .await?;

    Ok(Json(report))
}
