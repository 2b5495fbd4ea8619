use chrono::Utc;
use contracts::system::auth::{validate_email, UserInfo};
use contracts::system::users::{CreateUserDto, User};
use sea_orm::ConnectionTrait;
use thiserror::Error;

use super::repository;
use crate::shared::error::AppError;
use crate::system::auth::password;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("{0}")]
    Invalid(String),

    #[error("Este e-mail já está cadastrado.")]
    EmailTaken,

    #[error("E-mail ou senha inválidos.")]
    InvalidCredentials,

    #[error("Senha atual incorreta.")]
    WrongPassword,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        let message = e.to_string();
        match e {
            UserError::Invalid(msg) => AppError::BadRequest(msg),
            UserError::EmailTaken => AppError::Conflict(message),
            UserError::InvalidCredentials => AppError::Unauthorized,
            UserError::WrongPassword => AppError::BadRequest(message),
            UserError::Other(inner) => AppError::Internal(inner),
        }
    }
}

pub fn to_user_info(user: &User) -> UserInfo {
    UserInfo {
        id: user.id.clone(),
        email: user.email.clone(),
        full_name: user.full_name.clone(),
        is_admin: user.is_admin,
    }
}

/// Создать пользователя; e-mail приводится к нижнему регистру
pub async fn create<C: ConnectionTrait>(db: &C, dto: CreateUserDto) -> Result<String, UserError> {
    let email = dto.email.trim().to_lowercase();
    validate_email(&email).map_err(UserError::Invalid)?;
    password::validate_password_strength(&dto.password).map_err(UserError::Invalid)?;

    if repository::get_by_email(db, &email).await?.is_some() {
        return Err(UserError::EmailTaken);
    }

    let password_hash = password::hash_password(&dto.password)?;
    let now = Utc::now().to_rfc3339();
    let user = User {
        id: uuid::Uuid::new_v4().to_string(),
        email,
        full_name: dto
            .full_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty()),
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now.clone(),
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(db, &user, &password_hash).await?;
    Ok(user.id)
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: &str) -> anyhow::Result<Option<User>> {
    repository::get_by_id(db, id).await
}

/// Проверка e-mail и пароля. Неактивный пользователь не может войти.
pub async fn verify_credentials<C: ConnectionTrait>(
    db: &C,
    email: &str,
    password: &str,
) -> Result<User, UserError> {
    let user = repository::get_by_email(db, email)
        .await?
        .filter(|u| u.is_active)
        .ok_or(UserError::InvalidCredentials)?;

    let hash = repository::get_password_hash(db, &user.id)
        .await?
        .ok_or(UserError::InvalidCredentials)?;

    if !password::verify_password(password, &hash)? {
        return Err(UserError::InvalidCredentials);
    }

    if let Err(e) = repository::update_last_login(db, &user.id).await {
        tracing::warn!("Failed to update last login for {}: {}", user.id, e);
    }
    Ok(user)
}

/// Смена собственного пароля с проверкой текущего
pub async fn change_password<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    current_password: &str,
    new_password: &str,
) -> Result<(), UserError> {
    let hash = repository::get_password_hash(db, user_id)
        .await?
        .ok_or_else(|| UserError::Other(anyhow::anyhow!("User {} not found", user_id)))?;

    if !password::verify_password(current_password, &hash)? {
        return Err(UserError::WrongPassword);
    }
    password::validate_password_strength(new_password).map_err(UserError::Invalid)?;

    let new_hash = password::hash_password(new_password)?;
    repository::update_password(db, user_id, &new_hash).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;

    fn dto(email: &str, password: &str) -> CreateUserDto {
        CreateUserDto {
            email: email.to_string(),
            password: password.to_string(),
            full_name: Some(" Ana Souza ".to_string()),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn test_signup_and_login() {
        let db = memory_db().await;
        let id = create(&db, dto("Ana@LicitaX.com.br", "segredo1")).await.unwrap();

        let user = verify_credentials(&db, "ana@licitax.com.br", "segredo1").await.unwrap();
        assert_eq!(user.id, id);
        assert_eq!(user.full_name.as_deref(), Some("Ana Souza"));

        let err = verify_credentials(&db, "ana@licitax.com.br", "errado").await.unwrap_err();
        assert!(matches!(err, UserError::InvalidCredentials));
        let err = verify_credentials(&db, "ninguem@licitax.com.br", "segredo1").await.unwrap_err();
        assert!(matches!(err, UserError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_signup_validation() {
        let db = memory_db().await;
        assert!(matches!(
            create(&db, dto("ana", "segredo1")).await,
            Err(UserError::Invalid(_))
        ));
        assert!(matches!(
            create(&db, dto("ana@licitax.com.br", "123")).await,
            Err(UserError::Invalid(_))
        ));

        create(&db, dto("ana@licitax.com.br", "segredo1")).await.unwrap();
        assert!(matches!(
            create(&db, dto("ANA@licitax.com.br", "segredo2")).await,
            Err(UserError::EmailTaken)
        ));
    }

    #[tokio::test]
    async fn test_change_password() {
        let db = memory_db().await;
        let id = create(&db, dto("ana@licitax.com.br", "segredo1")).await.unwrap();

        let err = change_password(&db, &id, "errado", "novasenha").await.unwrap_err();
        assert!(matches!(err, UserError::WrongPassword));
        let err = change_password(&db, &id, "segredo1", "123").await.unwrap_err();
        assert!(matches!(err, UserError::Invalid(_)));

        change_password(&db, &id, "segredo1", "novasenha").await.unwrap();
        assert!(verify_credentials(&db, "ana@licitax.com.br", "novasenha").await.is_ok());
    }
}
