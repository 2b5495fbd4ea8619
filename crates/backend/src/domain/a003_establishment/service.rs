use anyhow::Context;
use contracts::domain::a003_establishment::EstablishmentRow;
use contracts::shared::options::FilterOption;
use contracts::shared::search::{FilterState, ResultPage};

use super::repository;
use crate::shared::data::db::get_connection;

pub async fn search(state: FilterState) -> anyhow::Result<ResultPage<EstablishmentRow>> {
    repository::search(get_connection(), &state)
        .await
        .context("establishment search failed")
}

pub async fn sector_options() -> anyhow::Result<Vec<FilterOption>> {
    repository::sector_options(get_connection()).await
}

pub async fn region_options() -> anyhow::Result<Vec<FilterOption>> {
    repository::region_options(get_connection()).await
}
