//! Начальное заполнение справочников и лицитаций из CSV.
//!
//! Каждая таблица заполняется только если она пуста, поэтому повторный старт
//! ничего не дублирует. Отсутствующий файл пропускается.

use anyhow::Context;
use contracts::domain::a002_company::Company;
use contracts::domain::a003_establishment::Establishment;
use contracts::domain::a004_sector::Sector;
use contracts::domain::a005_region::Region;
use contracts::shared::cnpj::{cnpj_root, normalize_cnpj};
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement, Value};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

// ============================================================================
// CSV rows
// ============================================================================

#[derive(Debug, Deserialize)]
struct CompanyCsv {
    cnpj_root: String,
    legal_name: String,
    size_band: Option<String>,
    legal_nature: Option<String>,
    share_capital: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct EstablishmentCsv {
    cnpj: String,
    trade_name: Option<String>,
    status: Option<String>,
    activity_start: Option<i64>,
    sector_code: Option<String>,
    region_code: Option<String>,
    state: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TenderCsv {
    id: i64,
    number: String,
    agency: String,
    object: String,
    modality: String,
    status: String,
    estimated_value: Option<f64>,
    opening_at: String,
    closing_at: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TenderDocumentCsv {
    tender_id: i64,
    name: String,
    kind: String,
    url: String,
    size_bytes: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TenderProposalCsv {
    tender_id: i64,
    value: f64,
    status: String,
    sent_at: String,
    company_cnpj: Option<String>,
}

impl CompanyCsv {
    fn into_record(self) -> Option<Company> {
        let root = normalize_cnpj(&self.cnpj_root);
        if root.len() != 8 {
            tracing::warn!("seed: skipping company with invalid root '{}'", self.cnpj_root);
            return None;
        }
        Some(Company {
            cnpj_root: root,
            legal_name: self.legal_name,
            size_band: self.size_band,
            legal_nature: self.legal_nature,
            share_capital: self.share_capital,
        })
    }
}

impl EstablishmentCsv {
    fn into_record(self) -> Option<Establishment> {
        let cnpj = normalize_cnpj(&self.cnpj);
        if cnpj.len() != 14 {
            tracing::warn!("seed: skipping establishment with invalid CNPJ '{}'", self.cnpj);
            return None;
        }
        let root = cnpj_root(&cnpj)?.to_string();
        Some(Establishment {
            id: 0,
            cnpj,
            cnpj_root: root,
            trade_name: self.trade_name,
            status: self.status,
            activity_start: self.activity_start,
            sector_code: self.sector_code,
            region_code: self.region_code,
            state: self.state.map(|s| s.trim().to_uppercase()),
            email: self.email,
            phone: self.phone,
        })
    }
}

// ============================================================================
// Reading
// ============================================================================

/// Разобрать CSV с заголовком. Пустые ячейки читаются как None.
pub fn parse_csv<T: DeserializeOwned, R: Read>(reader: R) -> anyhow::Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for (idx, record) in rdr.deserialize().enumerate() {
        let row: T = record.with_context(|| format!("CSV row {}", idx + 2))?;
        rows.push(row);
    }
    Ok(rows)
}

fn read_file<T: DeserializeOwned>(dir: &Path, file_name: &str) -> anyhow::Result<Option<Vec<T>>> {
    let path = dir.join(file_name);
    if !path.exists() {
        tracing::warn!("seed: {} not found, skipping", path.display());
        return Ok(None);
    }
    let file = std::fs::File::open(&path)?;
    let rows = parse_csv(file).with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(Some(rows))
}

// ============================================================================
// Writing
// ============================================================================

async fn table_is_empty<C: ConnectionTrait>(db: &C, table: &str) -> anyhow::Result<bool> {
    let sql = format!("SELECT COUNT(*) AS count FROM {}", table);
    let row = db
        .query_one(Statement::from_string(DatabaseBackend::Sqlite, sql))
        .await?;
    let count: i64 = match row {
        Some(r) => r.try_get("", "count")?,
        None => 0,
    };
    Ok(count == 0)
}

async fn insert_rows<C: ConnectionTrait>(
    db: &C,
    sql: &str,
    rows: Vec<Vec<Value>>,
) -> anyhow::Result<usize> {
    let count = rows.len();
    for values in rows {
        db.execute(Statement::from_sql_and_values(DatabaseBackend::Sqlite, sql, values))
            .await?;
    }
    Ok(count)
}

/// Сколько строк загружено в каждую таблицу
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub sectors: usize,
    pub regions: usize,
    pub companies: usize,
    pub establishments: usize,
    pub tenders: usize,
    pub documents: usize,
    pub proposals: usize,
}

impl SeedReport {
    pub fn total(&self) -> usize {
        self.sectors
            + self.regions
            + self.companies
            + self.establishments
            + self.tenders
            + self.documents
            + self.proposals
    }
}

/// Заполнить пустые таблицы из CSV-файлов каталога `dir`
pub async fn seed_if_empty<C: ConnectionTrait>(db: &C, dir: &Path) -> anyhow::Result<SeedReport> {
    let mut report = SeedReport::default();

    if table_is_empty(db, "a004_sectors").await? {
        if let Some(rows) = read_file::<Sector>(dir, "sectors.csv")? {
            let values = rows
                .into_iter()
                .map(|s| vec![s.code.into(), s.description.into()])
                .collect();
            report.sectors = insert_rows(
                db,
                "INSERT INTO a004_sectors (code, description) VALUES (?, ?)",
                values,
            )
            .await?;
        }
    }

    if table_is_empty(db, "a005_regions").await? {
        if let Some(rows) = read_file::<Region>(dir, "regions.csv")? {
            let values = rows
                .into_iter()
                .map(|r| vec![r.code.into(), r.name.into(), r.state.to_uppercase().into()])
                .collect();
            report.regions = insert_rows(
                db,
                "INSERT INTO a005_regions (code, name, state) VALUES (?, ?, ?)",
                values,
            )
            .await?;
        }
    }

    if table_is_empty(db, "a002_companies").await? {
        if let Some(rows) = read_file::<CompanyCsv>(dir, "companies.csv")? {
            let values = rows
                .into_iter()
                .filter_map(CompanyCsv::into_record)
                .map(|c| {
                    vec![
                        c.cnpj_root.into(),
                        c.legal_name.into(),
                        c.size_band.into(),
                        c.legal_nature.into(),
                        c.share_capital.into(),
                    ]
                })
                .collect();
            report.companies = insert_rows(
                db,
                "INSERT INTO a002_companies (cnpj_root, legal_name, size_band, legal_nature, share_capital) \
                 VALUES (?, ?, ?, ?, ?)",
                values,
            )
            .await?;
        }
    }

    if table_is_empty(db, "a003_establishments").await? {
        if let Some(rows) = read_file::<EstablishmentCsv>(dir, "establishments.csv")? {
            let values = rows
                .into_iter()
                .filter_map(EstablishmentCsv::into_record)
                .map(|e| {
                    vec![
                        e.cnpj.into(),
                        e.cnpj_root.into(),
                        e.trade_name.into(),
                        e.status.into(),
                        e.activity_start.into(),
                        e.sector_code.into(),
                        e.region_code.into(),
                        e.state.into(),
                        e.email.into(),
                        e.phone.into(),
                    ]
                })
                .collect();
            report.establishments = insert_rows(
                db,
                "INSERT INTO a003_establishments \
                 (cnpj, cnpj_root, trade_name, status, activity_start, sector_code, region_code, state, email, phone) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                values,
            )
            .await?;
        }
    }

    if table_is_empty(db, "a001_tenders").await? {
        if let Some(rows) = read_file::<TenderCsv>(dir, "tenders.csv")? {
            let values = rows
                .into_iter()
                .map(|t| {
                    vec![
                        t.id.into(),
                        t.number.into(),
                        t.agency.into(),
                        t.object.into(),
                        t.modality.into(),
                        t.status.into(),
                        t.estimated_value.into(),
                        t.opening_at.into(),
                        t.closing_at.into(),
                        t.description.into(),
                    ]
                })
                .collect();
            report.tenders = insert_rows(
                db,
                "INSERT INTO a001_tenders \
                 (id, number, agency, object, modality, status, estimated_value, opening_at, closing_at, description) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                values,
            )
            .await?;
        }
    }

    if table_is_empty(db, "a001_tender_documents").await? {
        if let Some(rows) = read_file::<TenderDocumentCsv>(dir, "tender_documents.csv")? {
            let values = rows
                .into_iter()
                .map(|d| {
                    vec![
                        d.tender_id.into(),
                        d.name.into(),
                        d.kind.into(),
                        d.url.into(),
                        d.size_bytes.into(),
                    ]
                })
                .collect();
            report.documents = insert_rows(
                db,
                "INSERT INTO a001_tender_documents (tender_id, name, kind, url, size_bytes) \
                 VALUES (?, ?, ?, ?, ?)",
                values,
            )
            .await?;
        }
    }

    if table_is_empty(db, "a001_tender_proposals").await? {
        if let Some(rows) = read_file::<TenderProposalCsv>(dir, "tender_proposals.csv")? {
            let values = rows
                .into_iter()
                .map(|p| {
                    let cnpj = p.company_cnpj.map(|c| normalize_cnpj(&c));
                    vec![
                        p.tender_id.into(),
                        p.value.into(),
                        p.status.into(),
                        p.sent_at.into(),
                        cnpj.into(),
                    ]
                })
                .collect();
            report.proposals = insert_rows(
                db,
                "INSERT INTO a001_tender_proposals (tender_id, value, status, sent_at, company_cnpj) \
                 VALUES (?, ?, ?, ?, ?)",
                values,
            )
            .await?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::memory_db;

    #[test]
    fn test_parse_establishment_csv_normalizes_cnpj() {
        let data = "cnpj,trade_name,status,activity_start,sector_code,region_code,state,email,phone\n\
                    12.345.678/0001-95,Padaria Central,02,20150310,4721102,3106200,mg,,\n\
                    999,Inválido,02,,,,,,\n";
        let rows: Vec<EstablishmentCsv> = parse_csv(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 2);

        let records: Vec<Establishment> = rows.into_iter().filter_map(EstablishmentCsv::into_record).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cnpj, "12345678000195");
        assert_eq!(records[0].cnpj_root, "12345678");
        assert_eq!(records[0].state.as_deref(), Some("MG"));
        assert_eq!(records[0].email, None);
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let dir = std::env::temp_dir().join(format!("licitax-seed-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("sectors.csv"), "code,description\n4721102,Padaria\n").unwrap();
        std::fs::write(
            dir.join("regions.csv"),
            "code,name,state\n3106200,Belo Horizonte,mg\n",
        )
        .unwrap();

        let db = memory_db().await;
        let first = seed_if_empty(&db, &dir).await.unwrap();
        assert_eq!(first.sectors, 1);
        assert_eq!(first.regions, 1);
        assert_eq!(first.establishments, 0);

        let second = seed_if_empty(&db, &dir).await.unwrap();
        assert_eq!(second.total(), 0);

        std::fs::remove_dir_all(&dir).ok();
    }
}
