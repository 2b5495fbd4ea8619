use contracts::system::profile::{Profile, ProfileKind, UpdateProfileDto};
use sea_orm::ConnectionTrait;

use super::repository;
use crate::shared::error::AppError;
use crate::system::users::repository as users;

/// Профиль пользователя; до первого сохранения строится из учётной записи
pub async fn get_or_default<C: ConnectionTrait>(db: &C, user_id: &str) -> Result<Profile, AppError> {
    if let Some(profile) = repository::get(db, user_id).await? {
        return Ok(profile);
    }
    let user = users::get_by_id(db, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Usuário não encontrado"))?;
    Ok(Profile {
        user_id: user.id,
        email: user.email,
        full_name: user.full_name,
        kind: ProfileKind::default(),
        bio: None,
        avatar_url: None,
        email_notifications: true,
        updated_at: None,
    })
}

/// Сохранить профиль; имя синхронизируется в учётную запись (шапка показывает его)
pub async fn save<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    dto: UpdateProfileDto,
) -> Result<Profile, AppError> {
    let dto = dto.normalized();
    dto.validate().map_err(AppError::BadRequest)?;

    if users::get_by_id(db, user_id).await?.is_none() {
        return Err(AppError::not_found("Usuário não encontrado"));
    }

    repository::upsert(db, user_id, &dto).await?;
    users::update_full_name(db, user_id, dto.full_name.as_deref()).await?;

    repository::get(db, user_id)
        .await?
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Profile {} vanished after upsert", user_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;
    use crate::system::users::service as user_service;
    use contracts::system::users::CreateUserDto;

    async fn user(db: &sea_orm::DatabaseConnection) -> String {
        user_service::create(
            db,
            CreateUserDto {
                email: "ana@licitax.com.br".into(),
                password: "segredo1".into(),
                full_name: Some("Ana".into()),
                is_admin: false,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_default_profile_from_account() {
        let db = memory_db().await;
        let id = user(&db).await;

        let profile = get_or_default(&db, &id).await.unwrap();
        assert_eq!(profile.email, "ana@licitax.com.br");
        assert_eq!(profile.full_name.as_deref(), Some("Ana"));
        assert_eq!(profile.kind, ProfileKind::Consultor);
        assert!(profile.email_notifications);
        assert!(profile.updated_at.is_none());
    }

    #[tokio::test]
    async fn test_upsert_twice() {
        let db = memory_db().await;
        let id = user(&db).await;

        let mut dto = UpdateProfileDto {
            full_name: Some("Ana Souza".into()),
            kind: ProfileKind::Empresa,
            bio: Some("  ".into()),
            avatar_url: None,
            email_notifications: false,
        };
        let saved = save(&db, &id, dto.clone()).await.unwrap();
        assert_eq!(saved.kind, ProfileKind::Empresa);
        assert_eq!(saved.bio, None);
        assert!(!saved.email_notifications);

        dto.bio = Some("Consultoria em licitações".into());
        let saved = save(&db, &id, dto).await.unwrap();
        assert_eq!(saved.bio.as_deref(), Some("Consultoria em licitações"));

        let account = users::get_by_id(&db, &id).await.unwrap().unwrap();
        assert_eq!(account.full_name.as_deref(), Some("Ana Souza"));
    }

    #[tokio::test]
    async fn test_invalid_avatar_is_rejected() {
        let db = memory_db().await;
        let id = user(&db).await;
        let dto = UpdateProfileDto {
            full_name: None,
            kind: ProfileKind::Consultor,
            bio: None,
            avatar_url: Some("javascript:alert(1)".into()),
            email_notifications: true,
        };
        assert!(matches!(save(&db, &id, dto).await, Err(AppError::BadRequest(_))));
    }
}
