use contracts::dashboards::d400_overview::dto::OverviewResponse;

use crate::shared::http;

pub async fn get_overview() -> Result<OverviewResponse, String> {
    http::get_json("/api/d400/overview").await
}
