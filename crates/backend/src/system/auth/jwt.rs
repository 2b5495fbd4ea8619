use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use contracts::system::auth::TokenClaims;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use once_cell::sync::OnceCell;
use rand::Rng;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use sha2::{Digest, Sha256};

use crate::shared::config;

const JWT_SECRET_KEY: &str = "jwt_secret";

static JWT_SECRET: OnceCell<String> = OnceCell::new();

/// Загрузить секрет из sys_settings или сгенерировать и сохранить новый.
/// Вызывается при старте сервера.
pub async fn provision_secret<C: ConnectionTrait>(db: &C) -> Result<()> {
    let secret = match load_secret(db).await? {
        Some(secret) => secret,
        None => {
            let secret = generate_jwt_secret();
            save_secret(db, &secret).await?;
            tracing::info!("JWT secret generated and stored in sys_settings");
            secret
        }
    };
    if JWT_SECRET.set(secret).is_err() {
        tracing::warn!("JWT secret already provisioned");
    }
    Ok(())
}

fn secret() -> Result<&'static str> {
    JWT_SECRET
        .get()
        .map(String::as_str)
        .context("JWT secret is not provisioned")
}

/// Claims с временем жизни `lifetime` от текущего момента
pub fn build_claims(user_id: &str, email: &str, is_admin: bool, lifetime: Duration) -> TokenClaims {
    let now = Utc::now();
    TokenClaims {
        sub: user_id.to_string(),
        email: email.to_string(),
        is_admin,
        exp: (now + lifetime).timestamp().max(0) as usize,
        iat: now.timestamp().max(0) as usize,
    }
}

pub fn encode_token(claims: &TokenClaims, secret: &str) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .context("Failed to encode JWT token")
}

pub fn decode_token(token: &str, secret: &str) -> Result<TokenClaims> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .context("Failed to decode JWT token")?;
    Ok(token_data.claims)
}

/// Access token (HS256), срок жизни из `[auth] access_token_hours`
pub fn generate_access_token(user_id: &str, email: &str, is_admin: bool) -> Result<String> {
    let hours = config::current().auth.access_token_hours;
    let claims = build_claims(user_id, email, is_admin, Duration::hours(hours));
    encode_token(&claims, secret()?)
}

pub fn validate_token(token: &str) -> Result<TokenClaims> {
    decode_token(token, secret()?)
}

/// Refresh token: 256 случайных бит в base64 url-safe
pub fn generate_refresh_token() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let bytes: [u8; 32] = rand::thread_rng().gen();
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Срок действия refresh token из `[auth] refresh_token_days` (RFC 3339)
pub fn refresh_token_expiration() -> String {
    let days = config::current().auth.refresh_token_days;
    (Utc::now() + Duration::days(days)).to_rfc3339()
}

/// В БД хранится только SHA-256 от refresh token
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn generate_jwt_secret() -> String {
    use base64::{engine::general_purpose, Engine as _};
    let random_bytes: [u8; 32] = rand::thread_rng().gen();
    general_purpose::STANDARD.encode(random_bytes)
}

async fn load_secret<C: ConnectionTrait>(db: &C) -> Result<Option<String>> {
    let result = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT value FROM sys_settings WHERE key = ?",
            [JWT_SECRET_KEY.into()],
        ))
        .await?;

    match result {
        Some(row) => Ok(Some(row.try_get("", "value")?)),
        None => Ok(None),
    }
}

async fn save_secret<C: ConnectionTrait>(db: &C, secret: &str) -> Result<()> {
    let now = Utc::now().to_rfc3339();
    db.execute(Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        "INSERT OR REPLACE INTO sys_settings (key, value, description, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?)",
        [
            JWT_SECRET_KEY.into(),
            secret.to_string().into(),
            "Auto-generated JWT secret for authentication".into(),
            now.clone().into(),
            now.into(),
        ],
    ))
    .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;

    #[test]
    fn test_token_roundtrip() {
        let claims = build_claims("u-1", "ana@licitax.com.br", false, Duration::hours(1));
        let token = encode_token(&claims, "segredo").unwrap();
        let decoded = decode_token(&token, "segredo").unwrap();
        assert_eq!(decoded.sub, "u-1");
        assert_eq!(decoded.email, "ana@licitax.com.br");
        assert!(decode_token(&token, "outro").is_err());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let claims = build_claims("u-1", "ana@licitax.com.br", false, Duration::hours(-2));
        let token = encode_token(&claims, "segredo").unwrap();
        assert!(decode_token(&token, "segredo").is_err());
    }

    #[test]
    fn test_hash_token() {
        let hash = hash_token("abc");
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_token("abc"));
        assert_ne!(hash, hash_token("abd"));
        assert_ne!(generate_refresh_token(), generate_refresh_token());
    }

    #[tokio::test]
    async fn test_secret_is_persisted_once() {
        let db = memory_db().await;
        assert!(load_secret(&db).await.unwrap().is_none());
        save_secret(&db, "s1").await.unwrap();
        assert_eq!(load_secret(&db).await.unwrap().as_deref(), Some("s1"));
    }
}
