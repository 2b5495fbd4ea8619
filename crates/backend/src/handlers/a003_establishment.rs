use axum::Json;
use contracts::domain::a003_establishment::EstablishmentRow;
use contracts::shared::options::FilterOption;
use contracts::shared::search::{FilterState, ResultPage};

use crate::domain::a003_establishment::service;
use crate::shared::error::AppResult;

/// POST /api/a003/establishments/search
pub async fn search(
    Json(state): Json<FilterState>,
) -> AppResult<Json<ResultPage<EstablishmentRow>>> {
    Ok(Json(service::search(state).await?))
}

/// GET /api/a003/establishments/options/sectors
pub async fn sector_options() -> AppResult<Json<Vec<FilterOption>>> {
    Ok(Json(service::sector_options().await?))
}

/// GET /api/a003/establishments/options/regions
pub async fn region_options() -> AppResult<Json<Vec<FilterOption>>> {
    Ok(Json(service::region_options().await?))
}
