use contracts::domain::a003_establishment::EstablishmentRow;
use contracts::shared::options::{sort_by_label, FilterOption};
use contracts::shared::rpc::{DistinctValuesRequest, DistinctValuesResponse};
use contracts::shared::search::{FilterState, ResultPage};

use crate::shared::http;

pub async fn search(state: FilterState) -> Result<ResultPage<EstablishmentRow>, String> {
    http::post_json("/api/a003/establishments/search", &state).await
}

pub async fn sector_options() -> Result<Vec<FilterOption>, String> {
    http::get_json("/api/a003/establishments/options/sectors").await
}

pub async fn region_options() -> Result<Vec<FilterOption>, String> {
    http::get_json("/api/a003/establishments/options/regions").await
}

/// UF из самих данных: код и подпись совпадают
pub async fn state_options() -> Result<Vec<FilterOption>, String> {
    let request = DistinctValuesRequest {
        table: "a003_establishments".to_string(),
        column: "state".to_string(),
    };
    let response: DistinctValuesResponse =
        http::post_json("/api/rpc/distinct_values", &request).await?;
    let mut options: Vec<FilterOption> = response
        .values
        .into_iter()
        .map(|uf| FilterOption::new(uf.clone(), uf))
        .collect();
    sort_by_label(&mut options);
    Ok(options)
}
