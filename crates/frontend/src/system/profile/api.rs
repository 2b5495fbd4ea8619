use contracts::system::profile::{Profile, UpdateProfileDto};

use crate::shared::http;

pub async fn get_profile() -> Result<Profile, String> {
    http::get_json("/api/system/profile").await
}

/// Upsert профиля текущего пользователя
pub async fn save_profile(dto: &UpdateProfileDto) -> Result<Profile, String> {
    http::put_json("/api/system/profile", dto).await
}
