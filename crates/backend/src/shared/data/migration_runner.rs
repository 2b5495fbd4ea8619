use anyhow::Context;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use sqlx::sqlite::SqlitePool;
use std::path::{Path, PathBuf};

use super::db::build_sqlite_url;

/// Миграции, встроенные в бинарник (используются без каталога migrations/ и в тестах)
pub const EMBEDDED_MIGRATIONS: &[(&str, &str)] = &[
    (
        "0001_system",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations/0001_system.sql")),
    ),
    (
        "0002_registry",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations/0002_registry.sql")),
    ),
    (
        "0003_tenders",
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/../../migrations/0003_tenders.sql")),
    ),
];

fn candidate_migrations_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.join("migrations"));
        }
    }

    dirs.push(PathBuf::from("migrations"));
    dirs.push(PathBuf::from("../../migrations"));
    dirs.push(PathBuf::from("../../../migrations"));

    dirs
}

/// Применить миграции из каталога migrations/ (sqlx Migrator).
///
/// Если каталог не найден, применяются встроенные скрипты: они идемпотентны
/// (CREATE ... IF NOT EXISTS).
pub async fn run_migrations(db_path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = build_sqlite_url(db_path);
    let pool = SqlitePool::connect(&db_url).await?;

    match candidate_migrations_dirs()
        .into_iter()
        .find(|p| p.exists() && p.is_dir())
    {
        Some(migrations_dir) => {
            tracing::info!("Using migrations directory: {}", migrations_dir.display());
            let migrator = sqlx::migrate::Migrator::new(migrations_dir.as_path()).await?;
            migrator.run(&pool).await?;
        }
        None => {
            tracing::warn!("migrations directory not found, applying embedded schema");
            for (name, script) in EMBEDDED_MIGRATIONS {
                let count = sqlx_apply_script(&pool, script)
                    .await
                    .with_context(|| format!("Failed to apply embedded migration {}", name))?;
                tracing::info!("Embedded migration {}: {} statements", name, count);
            }
        }
    }

    pool.close().await;
    tracing::info!("Database migrations applied successfully");
    Ok(())
}

/// Разбить SQL-скрипт на отдельные операторы (по ';', без строк-комментариев)
pub fn split_statements(script: &str) -> Vec<String> {
    script
        .split(';')
        .map(|statement| {
            statement
                .lines()
                .filter(|line| {
                    let trimmed_line = line.trim();
                    !trimmed_line.is_empty() && !trimmed_line.starts_with("--")
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

async fn sqlx_apply_script(pool: &SqlitePool, script: &str) -> anyhow::Result<usize> {
    let statements = split_statements(script);
    for statement in &statements {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(statements.len())
}

/// Применить скрипт через sea-orm соединение
pub async fn apply_script<C: ConnectionTrait>(db: &C, script: &str) -> anyhow::Result<usize> {
    let statements = split_statements(script);
    for (idx, statement) in statements.iter().enumerate() {
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            statement.clone(),
        ))
        .await
        .with_context(|| {
            format!(
                "Failed to execute statement #{}: {}",
                idx,
                statement.lines().take(3).collect::<Vec<_>>().join(" ")
            )
        })?;
    }
    Ok(statements.len())
}

/// Применить все встроенные миграции (тестовая БД в памяти)
pub async fn apply_embedded<C: ConnectionTrait>(db: &C) -> anyhow::Result<()> {
    for (name, script) in EMBEDDED_MIGRATIONS {
        apply_script(db, script)
            .await
            .with_context(|| format!("Failed to apply embedded migration {}", name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_statements_skips_comments() {
        let script = "-- header\nCREATE TABLE a (id INTEGER);\n\n-- second\nCREATE INDEX i ON a(id);\n";
        let statements = split_statements(script);
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0], "CREATE TABLE a (id INTEGER)");
        assert!(statements[1].starts_with("CREATE INDEX"));
    }

    #[test]
    fn test_embedded_migrations_are_not_empty() {
        for (name, script) in EMBEDDED_MIGRATIONS {
            assert!(!split_statements(script).is_empty(), "{} is empty", name);
        }
    }
}
