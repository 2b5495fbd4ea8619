use axum::Json;
use contracts::shared::rpc::{DistinctValuesRequest, DistinctValuesResponse};

use crate::shared::data::db::get_connection;
use crate::shared::error::{AppError, AppResult};
use crate::shared::lookup::{self, LookupError};

/// POST /api/rpc/distinct_values
pub async fn distinct_values(
    Json(request): Json<DistinctValuesRequest>,
) -> AppResult<Json<DistinctValuesResponse>> {
    match lookup::distinct_values(get_connection(), &request.table, &request.column).await {
        Ok(values) => Ok(Json(DistinctValuesResponse { values })),
        Err(e @ LookupError::NotAllowed { .. }) => {
            tracing::warn!("{}", e);
            Err(AppError::BadRequest(e.to_string()))
        }
        Err(LookupError::Db(e)) => Err(e.into()),
    }
}
