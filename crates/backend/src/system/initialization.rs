use anyhow::Result;
use contracts::system::users::CreateUserDto;
use sea_orm::ConnectionTrait;

use crate::system::users::{repository, service};

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@licitax.local";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

/// Создать учётную запись администратора, если пользователей нет
pub async fn ensure_admin_user_exists<C: ConnectionTrait>(db: &C) -> Result<()> {
    if repository::count_users(db).await? > 0 {
        return Ok(());
    }

    tracing::info!("No users found. Creating default admin user...");
    let admin_id = service::create(
        db,
        CreateUserDto {
            email: DEFAULT_ADMIN_EMAIL.to_string(),
            password: DEFAULT_ADMIN_PASSWORD.to_string(),
            full_name: Some("Administrador".to_string()),
            is_admin: true,
        },
    )
    .await
    .map_err(|e| anyhow::anyhow!("Failed to create default admin: {}", e))?;

    tracing::warn!("Default admin user created: {} (id {})", DEFAULT_ADMIN_EMAIL, admin_id);
    tracing::warn!("Password: {}. Change it on the Configurações page.", DEFAULT_ADMIN_PASSWORD);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;

    #[tokio::test]
    async fn test_admin_created_once() {
        let db = memory_db().await;
        ensure_admin_user_exists(&db).await.unwrap();
        ensure_admin_user_exists(&db).await.unwrap();
        assert_eq!(repository::count_users(&db).await.unwrap(), 1);

        let admin = service::verify_credentials(&db, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
            .await
            .unwrap();
        assert!(admin.is_admin);
    }
}
