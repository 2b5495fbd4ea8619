use contracts::domain::a001_tender::{Tender, TenderDetail, TenderId};
use contracts::shared::options::FilterOption;
use contracts::shared::search::{FilterState, ResultPage};

use crate::shared::http;

/// Одна страница лицитаций по текущему состоянию фильтров
pub async fn search(state: FilterState) -> Result<ResultPage<Tender>, String> {
    http::post_json("/api/a001/tenders/search", &state).await
}

pub async fn get_detail(id: TenderId) -> Result<TenderDetail, String> {
    http::get_json(&format!("/api/a001/tenders/{}", id.as_string())).await
}

/// Модальности, встречающиеся в данных
pub async fn modality_options() -> Result<Vec<FilterOption>, String> {
    http::get_json("/api/a001/tenders/options/modalities").await
}
