use anyhow::{Context, Result};
use chrono::Utc;
use contracts::system::profile::{Profile, ProfileKind, UpdateProfileDto};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

/// Профиль вместе с e-mail учётной записи; None если строки профиля ещё нет
pub async fn get<C: ConnectionTrait>(db: &C, user_id: &str) -> Result<Option<Profile>> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT p.user_id AS user_id, u.email AS email, p.full_name AS full_name, p.kind AS kind, \
                    p.bio AS bio, p.avatar_url AS avatar_url, \
                    p.email_notifications AS email_notifications, p.updated_at AS updated_at \
             FROM sys_profiles p JOIN sys_users u ON u.id = p.user_id \
             WHERE p.user_id = ?",
            [user_id.into()],
        ))
        .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let kind: String = row.try_get("", "kind")?;
    Ok(Some(Profile {
        user_id: row.try_get("", "user_id")?,
        email: row.try_get("", "email")?,
        full_name: row.try_get("", "full_name")?,
        kind: ProfileKind::from_code(&kind).unwrap_or_default(),
        bio: row.try_get("", "bio")?,
        avatar_url: row.try_get("", "avatar_url")?,
        email_notifications: row.try_get::<i32>("", "email_notifications")? != 0,
        updated_at: row.try_get("", "updated_at")?,
    }))
}

/// INSERT ... ON CONFLICT(user_id) DO UPDATE
pub async fn upsert<C: ConnectionTrait>(db: &C, user_id: &str, dto: &UpdateProfileDto) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_profiles (user_id, full_name, kind, bio, avatar_url, email_notifications, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?) \
         ON CONFLICT(user_id) DO UPDATE SET \
             full_name = excluded.full_name, \
             kind = excluded.kind, \
             bio = excluded.bio, \
             avatar_url = excluded.avatar_url, \
             email_notifications = excluded.email_notifications, \
             updated_at = excluded.updated_at",
        [
            user_id.into(),
            dto.full_name.clone().into(),
            dto.kind.code().into(),
            dto.bio.clone().into(),
            dto.avatar_url.clone().into(),
            i32::from(dto.email_notifications).into(),
            Utc::now().to_rfc3339().into(),
        ],
    ))
    .await
    .context("Failed to upsert profile")?;
    Ok(())
}
