use chrono::NaiveDate;
use contracts::domain::a001_tender::{
    filters, sort_fields, Tender, TenderDetail, TenderDocument, TenderProposal,
};
use contracts::shared::search::{FilterState, ResultPage, PAGE_SIZE};
use sea_orm::entity::prelude::*;
use sea_orm::{DatabaseBackend, FromQueryResult, QueryOrder, QuerySelect, Statement};

use crate::shared::search::{
    execute_search, DateColumnDef, DateEncoding, FilterDef, QueryBuilder, SearchColumn,
    SearchSchema, SortDef,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a001_tenders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub number: String,
    pub agency: String,
    pub object: String,
    pub modality: String,
    pub status: String,
    pub estimated_value: Option<f64>,
    pub opening_at: String,
    pub closing_at: Option<String>,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Tender {
    fn from(m: Model) -> Self {
        Tender {
            id: m.id,
            number: m.number,
            agency: m.agency,
            object: m.object,
            modality: m.modality,
            status: m.status,
            estimated_value: m.estimated_value,
            opening_at: m.opening_at,
            closing_at: m.closing_at,
            description: m.description,
        }
    }
}

pub const SCHEMA: SearchSchema = SearchSchema {
    table: "a001_tenders",
    alias: "t",
    select: &[
        "t.id AS id",
        "t.number AS number",
        "t.agency AS agency",
        "t.object AS object",
        "t.modality AS modality",
        "t.status AS status",
        "t.estimated_value AS estimated_value",
        "t.opening_at AS opening_at",
        "t.closing_at AS closing_at",
        "t.description AS description",
    ],
    joins: &[],
    search_columns: &[
        SearchColumn::Text("t.number"),
        SearchColumn::Text("t.agency"),
        SearchColumn::Text("t.object"),
    ],
    filters: &[
        FilterDef {
            name: filters::STATUS,
            column: "t.status",
        },
        FilterDef {
            name: filters::MODALITY,
            column: "t.modality",
        },
    ],
    date_column: Some(DateColumnDef {
        column: "t.opening_at",
        encoding: DateEncoding::IsoText,
    }),
    sort_fields: &[
        SortDef {
            name: sort_fields::OPENING_AT,
            column: "t.opening_at",
        },
        SortDef {
            name: sort_fields::NUMBER,
            column: "t.number",
        },
        SortDef {
            name: sort_fields::ESTIMATED_VALUE,
            column: "t.estimated_value",
        },
    ],
    default_sort: sort_fields::OPENING_AT,
    tie_breaker: "t.id",
};

pub async fn search<C: ConnectionTrait>(
    db: &C,
    state: &FilterState,
) -> anyhow::Result<ResultPage<Tender>> {
    let query = QueryBuilder::new(&SCHEMA, state, PAGE_SIZE).build();
    let page: ResultPage<Model> = execute_search(db, &query).await?;
    Ok(ResultPage {
        rows: page.rows.into_iter().map(Into::into).collect(),
        total_count: page.total_count,
    })
}

#[derive(Debug, FromQueryResult)]
struct DocumentModel {
    id: i64,
    tender_id: i64,
    name: String,
    kind: String,
    url: String,
    size_bytes: Option<i64>,
}

#[derive(Debug, FromQueryResult)]
struct ProposalModel {
    id: i64,
    tender_id: i64,
    value: f64,
    status: String,
    sent_at: String,
    company_cnpj: Option<String>,
}

/// Лицитация с документами и предложениями; None если записи нет
pub async fn get_detail<C: ConnectionTrait>(db: &C, id: i64) -> anyhow::Result<Option<TenderDetail>> {
    let Some(tender) = Entity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let (documents, proposals) = tokio::try_join!(
        DocumentModel::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, tender_id, name, kind, url, size_bytes \
             FROM a001_tender_documents WHERE tender_id = ? ORDER BY id",
            [id.into()],
        ))
        .all(db),
        ProposalModel::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT id, tender_id, value, status, sent_at, company_cnpj \
             FROM a001_tender_proposals WHERE tender_id = ? ORDER BY sent_at DESC, id",
            [id.into()],
        ))
        .all(db),
    )?;

    Ok(Some(TenderDetail {
        tender: tender.into(),
        documents: documents
            .into_iter()
            .map(|d| TenderDocument {
                id: d.id,
                tender_id: d.tender_id,
                name: d.name,
                kind: d.kind,
                url: d.url,
                size_bytes: d.size_bytes,
            })
            .collect(),
        proposals: proposals
            .into_iter()
            .map(|p| TenderProposal {
                id: p.id,
                tender_id: p.tender_id,
                value: p.value,
                status: p.status,
                sent_at: p.sent_at,
                company_cnpj: p.company_cnpj,
            })
            .collect(),
    }))
}

/// Последние по дате открытия
pub async fn latest<C: ConnectionTrait>(db: &C, limit: u64) -> anyhow::Result<Vec<Tender>> {
    let items = Entity::find()
        .order_by_desc(Column::OpeningAt)
        .order_by_desc(Column::Id)
        .limit(limit)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn count_by_status<C: ConnectionTrait>(db: &C, status: &str) -> anyhow::Result<u64> {
    let count = Entity::find()
        .filter(Column::Status.eq(status))
        .count(db)
        .await?;
    Ok(count)
}

/// Лицитации со статусом `status`, у которых дата закрытия в [from, to]
pub async fn count_closing_between<C: ConnectionTrait>(
    db: &C,
    status: &str,
    from: NaiveDate,
    to: NaiveDate,
) -> anyhow::Result<u64> {
    let row = db
        .query_one(Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM a001_tenders \
             WHERE status = ? AND closing_at IS NOT NULL \
             AND substr(closing_at, 1, 10) >= ? AND substr(closing_at, 1, 10) <= ?",
            [
                status.into(),
                from.format("%Y-%m-%d").to_string().into(),
                to.format("%Y-%m-%d").to_string().into(),
            ],
        ))
        .await?;
    let count: i64 = match row {
        Some(r) => r.try_get("", "count")?,
        None => 0,
    };
    Ok(count.max(0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{exec, memory_db};
    use contracts::domain::a001_tender::default_filter_state;
    use contracts::shared::search::SortOrder;

    async fn seed_tenders(db: &DatabaseConnection) {
        exec(
            db,
            "INSERT INTO a001_tenders \
             (id, number, agency, object, modality, status, estimated_value, opening_at, closing_at) VALUES \
             (1, 'PE 001/2024', 'Prefeitura de Contagem', 'Merenda escolar', 'Pregão Eletrônico', 'aberta', 150000.0, '2024-03-01T09:00:00', '2024-03-20T18:00:00'), \
             (2, 'CC 014/2024', 'Secretaria de Saúde', 'Reforma de UBS', 'Concorrência', 'encerrada', NULL, '2024-05-10T10:00:00', NULL), \
             (3, 'PE 022/2024', 'Prefeitura de Betim', 'Material de limpeza', 'Pregão Eletrônico', 'aberta', 42000.5, '2024-06-15T14:30:00', '2024-06-25T18:00:00')",
        )
        .await;
        exec(
            db,
            "INSERT INTO a001_tender_documents (tender_id, name, kind, url, size_bytes) VALUES \
             (1, 'Edital', 'edital', 'https://example.org/edital.pdf', 204800), \
             (1, 'Anexo I', 'anexo', 'https://example.org/anexo.pdf', NULL)",
        )
        .await;
        exec(
            db,
            "INSERT INTO a001_tender_proposals (tender_id, value, status, sent_at, company_cnpj) VALUES \
             (1, 140000.0, 'enviada', '2024-03-10T12:00:00', '11111111000191')",
        )
        .await;
    }

    #[tokio::test]
    async fn test_default_sort_is_newest_first() {
        let db = memory_db().await;
        seed_tenders(&db).await;

        let page = search(&db, &default_filter_state()).await.unwrap();
        let ids: Vec<_> = page.rows.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[tokio::test]
    async fn test_estimated_value_nulls_last() {
        let db = memory_db().await;
        seed_tenders(&db).await;

        let mut state = default_filter_state();
        state.set_sort(sort_fields::ESTIMATED_VALUE, SortOrder::Asc);
        let ids: Vec<_> = search(&db, &state).await.unwrap().rows.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        state.set_sort(sort_fields::ESTIMATED_VALUE, SortOrder::Desc);
        let ids: Vec<_> = search(&db, &state).await.unwrap().rows.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[tokio::test]
    async fn test_search_filter_and_opening_range() {
        let db = memory_db().await;
        seed_tenders(&db).await;

        let mut state = default_filter_state();
        state.set_search_term("prefeitura");
        state.set_filter(filters::MODALITY, "Pregão Eletrônico");
        state.set_date_from(NaiveDate::from_ymd_opt(2024, 6, 15));
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].number, "PE 022/2024");

        state.set_date_to(NaiveDate::from_ymd_opt(2024, 1, 1));
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[tokio::test]
    async fn test_detail_with_children() {
        let db = memory_db().await;
        seed_tenders(&db).await;

        let detail = get_detail(&db, 1).await.unwrap().unwrap();
        assert_eq!(detail.tender.number, "PE 001/2024");
        assert_eq!(detail.documents.len(), 2);
        assert_eq!(detail.documents[1].size_bytes, None);
        assert_eq!(detail.proposals.len(), 1);

        assert!(get_detail(&db, 99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_dashboard_counters() {
        let db = memory_db().await;
        seed_tenders(&db).await;

        assert_eq!(count_by_status(&db, "aberta").await.unwrap(), 2);
        let from = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 6, 27).unwrap();
        assert_eq!(count_closing_between(&db, "aberta", from, to).await.unwrap(), 1);

        let latest = latest(&db, 2).await.unwrap();
        assert_eq!(latest.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 2]);
    }
}
