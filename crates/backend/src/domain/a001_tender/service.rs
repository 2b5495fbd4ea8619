use anyhow::Context;
use contracts::domain::a001_tender::{Tender, TenderDetail, TenderId};
use contracts::shared::options::{sort_by_label, FilterOption};
use contracts::shared::search::{FilterState, ResultPage};

use super::repository;
use crate::shared::data::db::get_connection;
use crate::shared::lookup;

pub async fn search(state: FilterState) -> anyhow::Result<ResultPage<Tender>> {
    repository::search(get_connection(), &state)
        .await
        .context("tender search failed")
}

pub async fn get_detail(id: TenderId) -> anyhow::Result<Option<TenderDetail>> {
    repository::get_detail(get_connection(), id.value()).await
}

/// Модальности, которые встречаются в данных (код и подпись совпадают)
pub async fn modality_options() -> anyhow::Result<Vec<FilterOption>> {
    let values = lookup::distinct_values(get_connection(), "a001_tenders", "modality").await?;
    let mut options: Vec<FilterOption> = values
        .into_iter()
        .map(|v| FilterOption::new(v.clone(), v))
        .collect();
    sort_by_label(&mut options);
    Ok(options)
}
