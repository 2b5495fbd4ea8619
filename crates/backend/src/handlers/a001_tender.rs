use axum::{extract::Path, Json};
use contracts::domain::a001_tender::{Tender, TenderDetail, TenderId};
use contracts::shared::options::FilterOption;
use contracts::shared::search::{FilterState, ResultPage};

use crate::domain::a001_tender::service;
use crate::shared::error::{AppError, AppResult};

/// POST /api/a001/tenders/search
pub async fn search(Json(state): Json<FilterState>) -> AppResult<Json<ResultPage<Tender>>> {
    Ok(Json(service::search(state).await?))
}

/// GET /api/a001/tenders/:id
pub async fn get_detail(Path(id): Path<String>) -> AppResult<Json<TenderDetail>> {
    let id = TenderId::from_string(&id).map_err(AppError::BadRequest)?;
    service::get_detail(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::not_found("Licitação não encontrada"))
}

/// GET /api/a001/tenders/options/modalities
pub async fn modality_options() -> AppResult<Json<Vec<FilterOption>>> {
    Ok(Json(service::modality_options().await?))
}
