use anyhow::Result;
use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};

use super::jwt::hash_token;

pub async fn store<C: ConnectionTrait>(
    db: &C,
    user_id: &str,
    token: &str,
    expires_at: &str,
) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_refresh_tokens (id, user_id, token_hash, expires_at, created_at) \
         VALUES (?, ?, ?, ?, ?)",
        [
            uuid::Uuid::new_v4().to_string().into(),
            user_id.to_string().into(),
            hash_token(token).into(),
            expires_at.to_string().into(),
            Utc::now().to_rfc3339().into(),
        ],
    ))
    .await?;
    Ok(())
}

/// user_id владельца, если токен не отозван и не истёк
pub async fn find_user<C: ConnectionTrait>(db: &C, token: &str) -> Result<Option<String>> {
    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT user_id FROM sys_refresh_tokens \
             WHERE token_hash = ? AND expires_at > ? AND revoked_at IS NULL",
            [hash_token(token).into(), Utc::now().to_rfc3339().into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "user_id")?)),
        None => Ok(None),
    }
}

pub async fn revoke<C: ConnectionTrait>(db: &C, token: &str) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_refresh_tokens SET revoked_at = ? WHERE token_hash = ? AND revoked_at IS NULL",
        [Utc::now().to_rfc3339().into(), hash_token(token).into()],
    ))
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;
    use chrono::Duration;

    #[tokio::test]
    async fn test_store_find_revoke() {
        let db = memory_db().await;
        let expires = (Utc::now() + Duration::days(1)).to_rfc3339();
        store(&db, "user-1", "tok", &expires).await.unwrap();

        assert_eq!(find_user(&db, "tok").await.unwrap().as_deref(), Some("user-1"));
        assert_eq!(find_user(&db, "other").await.unwrap(), None);

        revoke(&db, "tok").await.unwrap();
        assert_eq!(find_user(&db, "tok").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_token_is_ignored() {
        let db = memory_db().await;
        let expired = (Utc::now() - Duration::hours(1)).to_rfc3339();
        store(&db, "user-1", "old", &expired).await.unwrap();
        assert_eq!(find_user(&db, "old").await.unwrap(), None);
    }
}
