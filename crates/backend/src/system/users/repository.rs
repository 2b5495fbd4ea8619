use anyhow::{Context, Result};
use contracts::system::users::User;
use sea_orm::{ConnectionTrait, DatabaseBackend, QueryResult, Statement};

const USER_COLUMNS: &str =
    "id, email, full_name, is_active, is_admin, created_at, updated_at, last_login_at";

fn user_from_row(row: &QueryResult) -> Result<User> {
    Ok(User {
        id: row.try_get("", "id")?,
        email: row.try_get("", "email")?,
        full_name: row.try_get("", "full_name")?,
        is_active: row.try_get::<i32>("", "is_active")? != 0,
        is_admin: row.try_get::<i32>("", "is_admin")? != 0,
        created_at: row.try_get("", "created_at")?,
        updated_at: row.try_get("", "updated_at")?,
        last_login_at: row.try_get("", "last_login_at")?,
    })
}

async fn find_one<C: ConnectionTrait>(db: &C, column: &str, value: &str) -> Result<Option<User>> {
    let sql = format!("SELECT {} FROM sys_users WHERE {} = ?", USER_COLUMNS, column);
    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            &sql,
            [value.into()],
        ))
        .await?;
    row.as_ref().map(user_from_row).transpose()
}

pub async fn create_with_password<C: ConnectionTrait>(
    db: &C,
    user: &User,
    password_hash: &str,
) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT INTO sys_users (id, email, password_hash, full_name, is_active, is_admin, created_at, updated_at, last_login_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        [
            user.id.clone().into(),
            user.email.clone().into(),
            password_hash.to_string().into(),
            user.full_name.clone().into(),
            i32::from(user.is_active).into(),
            i32::from(user.is_admin).into(),
            user.created_at.clone().into(),
            user.updated_at.clone().into(),
            user.last_login_at.clone().into(),
        ],
    ))
    .await
    .context("Failed to insert user")?;
    Ok(())
}

pub async fn get_by_id<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<User>> {
    find_one(db, "id", id).await
}

/// Поиск по e-mail без учёта регистра (e-mail хранится в нижнем регистре)
pub async fn get_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<User>> {
    find_one(db, "email", &email.trim().to_lowercase()).await
}

pub async fn get_password_hash<C: ConnectionTrait>(db: &C, user_id: &str) -> Result<Option<String>> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT password_hash FROM sys_users WHERE id = ?",
            [user_id.into()],
        ))
        .await?;
    match row {
        Some(row) => Ok(Some(row.try_get("", "password_hash")?)),
        None => Ok(None),
    }
}

pub async fn update_last_login<C: ConnectionTrait>(db: &C, id: &str) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET last_login_at = ? WHERE id = ?",
        [chrono::Utc::now().to_rfc3339().into(), id.into()],
    ))
    .await
    .context("Failed to update last login")?;
    Ok(())
}

pub async fn update_password<C: ConnectionTrait>(db: &C, id: &str, password_hash: &str) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET password_hash = ?, updated_at = ? WHERE id = ?",
        [
            password_hash.into(),
            chrono::Utc::now().to_rfc3339().into(),
            id.into(),
        ],
    ))
    .await
    .context("Failed to update password")?;
    Ok(())
}

pub async fn update_full_name<C: ConnectionTrait>(
    db: &C,
    id: &str,
    full_name: Option<&str>,
) -> Result<()> {
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "UPDATE sys_users SET full_name = ?, updated_at = ? WHERE id = ?",
        [
            full_name.map(str::to_string).into(),
            chrono::Utc::now().to_rfc3339().into(),
            id.into(),
        ],
    ))
    .await
    .context("Failed to update full name")?;
    Ok(())
}

pub async fn count_users<C: ConnectionTrait>(db: &C) -> Result<u64> {
    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM sys_users".to_string(),
        ))
        .await?;
    let count: i64 = match row {
        Some(row) => row.try_get("", "count")?,
        None => 0,
    };
    Ok(count.max(0) as u64)
}
