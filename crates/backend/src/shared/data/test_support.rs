//! БД в памяти со всеми миграциями для тестов репозиториев.

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use super::migration_runner::apply_embedded;

pub async fn memory_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    // одно соединение: иначе у каждого соединения своя пустая БД
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let db = Database::connect(options).await.expect("connect sqlite::memory:");
    apply_embedded(&db).await.expect("apply migrations");
    db
}

pub async fn exec(db: &DatabaseConnection, sql: &str) {
    db.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
        .await
        .unwrap_or_else(|e| panic!("{}: {}", sql, e));
}

/// Минимальная фикстура справочника: 2 сектора, 2 муниципалитета, компании
/// и estabelecimentos с пустыми значениями в сортируемых полях
pub async fn seed_directory(db: &DatabaseConnection) {
    exec(
        db,
        "INSERT INTO a004_sectors (code, description) VALUES \
         ('4721102', 'Padaria e confeitaria'), ('6201501', 'Desenvolvimento de software')",
    )
    .await;
    exec(
        db,
        "INSERT INTO a005_regions (code, name, state) VALUES \
         ('3106200', 'Belo Horizonte', 'MG'), ('3550308', 'São Paulo', 'SP')",
    )
    .await;
    exec(
        db,
        "INSERT INTO a002_companies (cnpj_root, legal_name, size_band) VALUES \
         ('11111111', 'Alfa Pães LTDA', '01'), \
         ('22222222', 'Beta Sistemas SA', '05'), \
         ('33333333', 'Gama Comércio ME', '03')",
    )
    .await;
    exec(
        db,
        "INSERT INTO a003_establishments \
         (cnpj, cnpj_root, trade_name, status, activity_start, sector_code, region_code, state) VALUES \
         ('11111111000191', '11111111', 'Padaria Alfa', '02', 20150310, '4721102', '3106200', 'MG'), \
         ('22222222000102', '22222222', 'Beta', '02', 20190101, '6201501', '3550308', 'SP'), \
         ('33333333000183', '33333333', NULL, '08', 20101120, '4721102', '3550308', 'SP')",
    )
    .await;
}
