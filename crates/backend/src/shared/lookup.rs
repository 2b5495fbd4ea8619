//! Процедура distinct-значений для выпадающих списков фильтров.
//!
//! Таблица и колонка приходят от клиента, поэтому в SQL попадают только пары
//! из `DISTINCT_WHITELIST`.

use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr, Statement};
use thiserror::Error;

/// Разрешённые пары (таблица, колонка)
pub const DISTINCT_WHITELIST: &[(&str, &str)] = &[
    ("a003_establishments", "state"),
    ("a003_establishments", "status"),
    ("a003_establishments", "sector_code"),
    ("a003_establishments", "region_code"),
    ("a002_companies", "size_band"),
    ("a001_tenders", "modality"),
    ("a001_tenders", "status"),
    ("a005_regions", "state"),
];

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Consulta não permitida: {table}.{column}")]
    NotAllowed { table: String, column: String },

    #[error(transparent)]
    Db(#[from] DbErr),
}

fn whitelisted(table: &str, column: &str) -> Option<(&'static str, &'static str)> {
    DISTINCT_WHITELIST
        .iter()
        .copied()
        .find(|(t, c)| *t == table && *c == column)
}

/// Отсортированные уникальные непустые значения колонки
pub async fn distinct_values<C: ConnectionTrait>(
    db: &C,
    table: &str,
    column: &str,
) -> Result<Vec<String>, LookupError> {
    let (table, column) = whitelisted(table, column).ok_or_else(|| LookupError::NotAllowed {
        table: table.to_string(),
        column: column.to_string(),
    })?;

    let sql = format!(
        "SELECT DISTINCT CAST({col} AS TEXT) AS value FROM {table} \
         WHERE {col} IS NOT NULL AND TRIM(CAST({col} AS TEXT)) <> '' \
         ORDER BY value",
        col = column,
        table = table
    );

    let rows = db
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .await?;

    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        let value: String = row.try_get("", "value")?;
        values.push(value);
    }
    Ok(values)
}

/// Проверка при старте: каждая пара whitelist существует в схеме
pub async fn verify_whitelist<C: ConnectionTrait>(db: &C) -> anyhow::Result<()> {
    for (table, column) in DISTINCT_WHITELIST {
        let row = db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Sqlite,
                "SELECT COUNT(*) AS count FROM pragma_table_info(?) WHERE name = ?",
                [(*table).into(), (*column).into()],
            ))
            .await?;
        let count: i64 = match row {
            Some(r) => r.try_get("", "count")?,
            None => 0,
        };
        if count == 0 {
            anyhow::bail!("distinct_values whitelist references missing column {}.{}", table, column);
        }
    }
    tracing::info!("distinct_values: {} columns registered", DISTINCT_WHITELIST.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{exec, memory_db, seed_directory};

    #[tokio::test]
    async fn test_distinct_states_sorted_without_blanks() {
        let db = memory_db().await;
        seed_directory(&db).await;
        exec(
            &db,
            "INSERT INTO a003_establishments (cnpj, cnpj_root, state) VALUES \
             ('44444444000100', '44444444', ''), ('55555555000100', '55555555', NULL)",
        )
        .await;

        let values = distinct_values(&db, "a003_establishments", "state").await.unwrap();
        assert_eq!(values, vec!["MG".to_string(), "SP".to_string()]);
    }

    #[tokio::test]
    async fn test_rejects_pairs_outside_whitelist() {
        let db = memory_db().await;
        let err = distinct_values(&db, "sys_users", "password_hash").await.unwrap_err();
        assert!(matches!(err, LookupError::NotAllowed { .. }));
    }

    #[tokio::test]
    async fn test_whitelist_matches_schema() {
        let db = memory_db().await;
        verify_whitelist(&db).await.unwrap();
    }
}
