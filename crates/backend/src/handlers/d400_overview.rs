use axum::Json;
use contracts::dashboards::d400_overview::OverviewResponse;

use crate::dashboards::d400_overview::service;
use crate::shared::error::AppResult;

/// GET /api/d400/overview
pub async fn get_overview() -> AppResult<Json<OverviewResponse>> {
    Ok(Json(service::get_overview().await?))
}
