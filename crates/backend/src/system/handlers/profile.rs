use axum::Json;
use contracts::system::profile::{Profile, UpdateProfileDto};

use crate::shared::data::db::get_connection;
use crate::shared::error::AppResult;
use crate::system::auth::extractor::CurrentUser;
use crate::system::profile::service;

/// GET /api/system/profile
pub async fn get(user: CurrentUser) -> AppResult<Json<Profile>> {
    let profile = service::get_or_default(get_connection(), user.user_id()).await?;
    Ok(Json(profile))
}

/// PUT /api/system/profile
pub async fn update(
    user: CurrentUser,
    Json(dto): Json<UpdateProfileDto>,
) -> AppResult<Json<Profile>> {
    let profile = service::save(get_connection(), user.user_id(), dto).await?;
    Ok(Json(profile))
}
