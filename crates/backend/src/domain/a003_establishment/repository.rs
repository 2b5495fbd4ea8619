use contracts::domain::a003_establishment::{filters, sort_fields, EstablishmentRow};
use contracts::enums::RegistrationStatus;
use contracts::shared::options::{fallback_label, sort_by_label, CodeTable, FilterOption};
use contracts::shared::search::{FilterState, ResultPage, PAGE_SIZE};
use sea_orm::{ConnectionTrait, DatabaseBackend, FromQueryResult, Statement};

use crate::shared::search::{
    execute_search, DateColumnDef, DateEncoding, FilterDef, JoinDef, QueryBuilder, SearchColumn,
    SearchSchema, SortDef,
};

/// Справочник: estabelecimento + головная компания + CNAE + муниципалитет
pub const SCHEMA: SearchSchema = SearchSchema {
    table: "a003_establishments",
    alias: "e",
    select: &[
        "e.id AS id",
        "e.cnpj AS cnpj",
        "e.trade_name AS trade_name",
        "c.legal_name AS legal_name",
        "e.status AS status",
        "e.activity_start AS activity_start",
        "e.sector_code AS sector_code",
        "s.description AS sector_name",
        "r.name AS region_name",
        "e.state AS state",
        "c.size_band AS size_band",
        "e.email AS email",
        "e.phone AS phone",
    ],
    joins: &[
        JoinDef {
            table: "a002_companies",
            alias: "c",
            on: "c.cnpj_root = e.cnpj_root",
        },
        JoinDef {
            table: "a004_sectors",
            alias: "s",
            on: "s.code = e.sector_code",
        },
        JoinDef {
            table: "a005_regions",
            alias: "r",
            on: "r.code = e.region_code",
        },
    ],
    search_columns: &[
        SearchColumn::Text("e.trade_name"),
        SearchColumn::Text("c.legal_name"),
        SearchColumn::Digits("e.cnpj"),
    ],
    filters: &[
        FilterDef {
            name: filters::SECTOR,
            column: "e.sector_code",
        },
        FilterDef {
            name: filters::REGION,
            column: "e.region_code",
        },
        FilterDef {
            name: filters::STATE,
            column: "e.state",
        },
        FilterDef {
            name: filters::SIZE_BAND,
            column: "c.size_band",
        },
        FilterDef {
            name: filters::STATUS,
            column: "e.status",
        },
    ],
    date_column: Some(DateColumnDef {
        column: "e.activity_start",
        encoding: DateEncoding::CompactInteger,
    }),
    sort_fields: &[
        SortDef {
            name: sort_fields::TRADE_NAME,
            column: "e.trade_name",
        },
        SortDef {
            name: sort_fields::LEGAL_NAME,
            column: "c.legal_name",
        },
        SortDef {
            name: sort_fields::ACTIVITY_START,
            column: "e.activity_start",
        },
        SortDef {
            name: sort_fields::SECTOR_NAME,
            column: "s.description",
        },
    ],
    default_sort: sort_fields::TRADE_NAME,
    tie_breaker: "e.id",
};

#[derive(Debug, FromQueryResult)]
struct RowModel {
    id: i64,
    cnpj: String,
    trade_name: Option<String>,
    legal_name: Option<String>,
    status: Option<String>,
    activity_start: Option<i64>,
    sector_code: Option<String>,
    sector_name: Option<String>,
    region_name: Option<String>,
    state: Option<String>,
    size_band: Option<String>,
    email: Option<String>,
    phone: Option<String>,
}

impl From<RowModel> for EstablishmentRow {
    fn from(m: RowModel) -> Self {
        EstablishmentRow {
            id: m.id,
            cnpj: m.cnpj,
            trade_name: m.trade_name,
            legal_name: m.legal_name,
            status: m.status,
            activity_start: m.activity_start,
            sector_code: m.sector_code,
            sector_name: m.sector_name,
            region_name: m.region_name,
            state: m.state,
            size_band: m.size_band,
            email: m.email,
            phone: m.phone,
        }
    }
}

pub async fn search<C: ConnectionTrait>(
    db: &C,
    state: &FilterState,
) -> anyhow::Result<ResultPage<EstablishmentRow>> {
    let query = QueryBuilder::new(&SCHEMA, state, PAGE_SIZE).build();
    let page: ResultPage<RowModel> = execute_search(db, &query).await?;
    Ok(ResultPage {
        rows: page.rows.into_iter().map(Into::into).collect(),
        total_count: page.total_count,
    })
}

#[derive(Debug, FromQueryResult)]
struct OptionModel {
    code: String,
    label: Option<String>,
}

async fn load_options<C: ConnectionTrait>(
    db: &C,
    sql: &str,
    category: &str,
) -> anyhow::Result<Vec<FilterOption>> {
    let rows = OptionModel::find_by_statement(Statement::from_string(
        DatabaseBackend::Sqlite,
        sql.to_string(),
    ))
    .all(db)
    .await?;

    let mut options: Vec<FilterOption> = rows
        .into_iter()
        .map(|r| {
            let label = r
                .label
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| fallback_label(category, &r.code));
            FilterOption::new(r.code, label)
        })
        .collect();
    sort_by_label(&mut options);
    Ok(options)
}

/// Коды CNAE, которые встречаются в справочнике, с описанием
pub async fn sector_options<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<FilterOption>> {
    load_options(
        db,
        "SELECT DISTINCT e.sector_code AS code, s.description AS label \
         FROM a003_establishments e LEFT JOIN a004_sectors s ON s.code = e.sector_code \
         WHERE e.sector_code IS NOT NULL AND TRIM(e.sector_code) <> ''",
        "CNAE",
    )
    .await
}

/// Муниципалитеты, которые встречаются в справочнике: "Nome / UF"
pub async fn region_options<C: ConnectionTrait>(db: &C) -> anyhow::Result<Vec<FilterOption>> {
    load_options(
        db,
        "SELECT DISTINCT e.region_code AS code, r.name || ' / ' || r.state AS label \
         FROM a003_establishments e LEFT JOIN a005_regions r ON r.code = e.region_code \
         WHERE e.region_code IS NOT NULL AND TRIM(e.region_code) <> ''",
        "Município",
    )
    .await
}

/// Количество estabelecimentos; при `active_only` только situação "Ativa"
pub async fn count<C: ConnectionTrait>(db: &C, active_only: bool) -> anyhow::Result<u64> {
    let stmt = if active_only {
        Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM a003_establishments WHERE status = ?",
            [RegistrationStatus::Active.code().into()],
        )
    } else {
        Statement::from_string(
            DatabaseBackend::Sqlite,
            "SELECT COUNT(*) AS count FROM a003_establishments".to_string(),
        )
    };
    let count: i64 = match db.query_one(stmt).await? {
        Some(row) => row.try_get("", "count")?,
        None => 0,
    };
    Ok(count.max(0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{exec, memory_db, seed_directory};
    use chrono::NaiveDate;
    use contracts::domain::a003_establishment::default_filter_state;
    use contracts::shared::search::SortOrder;

    fn names(page: &ResultPage<EstablishmentRow>) -> Vec<Option<String>> {
        page.rows.iter().map(|r| r.trade_name.clone()).collect()
    }

    #[tokio::test]
    async fn test_unfiltered_search_returns_joined_rows() {
        let db = memory_db().await;
        seed_directory(&db).await;

        let page = search(&db, &default_filter_state()).await.unwrap();
        assert_eq!(page.total_count, 3);
        let beta = &page.rows[0];
        assert_eq!(beta.trade_name.as_deref(), Some("Beta"));
        assert_eq!(beta.legal_name.as_deref(), Some("Beta Sistemas SA"));
        assert_eq!(beta.sector_name.as_deref(), Some("Desenvolvimento de software"));
        assert_eq!(beta.region_name.as_deref(), Some("São Paulo"));
        assert_eq!(beta.size_band.as_deref(), Some("05"));
    }

    #[tokio::test]
    async fn test_null_trade_name_sorts_last_both_directions() {
        let db = memory_db().await;
        seed_directory(&db).await;

        let mut state = default_filter_state();
        let asc = search(&db, &state).await.unwrap();
        assert_eq!(
            names(&asc),
            vec![Some("Beta".to_string()), Some("Padaria Alfa".to_string()), None]
        );

        state.set_sort(sort_fields::TRADE_NAME, SortOrder::Desc);
        let desc = search(&db, &state).await.unwrap();
        assert_eq!(
            names(&desc),
            vec![Some("Padaria Alfa".to_string()), Some("Beta".to_string()), None]
        );
    }

    #[tokio::test]
    async fn test_inverted_date_range_yields_no_rows() {
        let db = memory_db().await;
        seed_directory(&db).await;

        let mut state = default_filter_state();
        state.set_date_from(NaiveDate::from_ymd_opt(2016, 1, 1));
        state.set_date_to(NaiveDate::from_ymd_opt(2015, 1, 1));
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 0);
        assert!(page.rows.is_empty());
    }

    #[tokio::test]
    async fn test_date_range_is_inclusive() {
        let db = memory_db().await;
        seed_directory(&db).await;

        let mut state = default_filter_state();
        state.set_date_from(NaiveDate::from_ymd_opt(2015, 3, 10));
        state.set_date_to(NaiveDate::from_ymd_opt(2019, 1, 1));
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 2);
    }

    #[tokio::test]
    async fn test_filter_on_joined_company_column() {
        let db = memory_db().await;
        seed_directory(&db).await;

        let mut state = default_filter_state();
        state.set_filter(filters::SIZE_BAND, "05");
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].cnpj, "22222222000102");
    }

    #[tokio::test]
    async fn test_search_matches_legal_name_and_cnpj_fragment() {
        let db = memory_db().await;
        seed_directory(&db).await;

        let mut state = default_filter_state();
        state.set_search_term("GAMA");
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].trade_name, None);

        state.set_search_term("22.222.222/0001");
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.rows[0].trade_name.as_deref(), Some("Beta"));
    }

    #[tokio::test]
    async fn test_search_folds_accented_capitals() {
        let db = memory_db().await;
        exec(
            &db,
            "INSERT INTO a002_companies (cnpj_root, legal_name) VALUES \
             ('44444444', 'CONSTRUÇÃO SÃO JOSÉ LTDA'), ('55555555', 'PADARIA SUL ME')",
        )
        .await;
        exec(
            &db,
            "INSERT INTO a003_establishments (cnpj, cnpj_root, trade_name) VALUES \
             ('44444444000110', '44444444', NULL), ('55555555000120', '55555555', 'PÃES DO SUL')",
        )
        .await;

        let mut state = default_filter_state();
        for term in ["construção", "Construção", "CONSTRUÇÃO", "são josé"] {
            state.set_search_term(term);
            let page = search(&db, &state).await.unwrap();
            assert_eq!(page.total_count, 1, "term {:?}", term);
            assert_eq!(page.rows[0].cnpj, "44444444000110");
        }
        for term in ["pães", "Pães", "PÃES"] {
            state.set_search_term(term);
            let page = search(&db, &state).await.unwrap();
            assert_eq!(page.total_count, 1, "term {:?}", term);
            assert_eq!(page.rows[0].trade_name.as_deref(), Some("PÃES DO SUL"));
        }
    }

    #[tokio::test]
    async fn test_huge_page_returns_empty_page() {
        let db = memory_db().await;
        seed_directory(&db).await;

        let mut state = default_filter_state();
        state.page = u64::MAX;
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 3);
        assert!(page.rows.is_empty());
    }

    #[tokio::test]
    async fn test_sort_by_joined_sector_name() {
        let db = memory_db().await;
        seed_directory(&db).await;

        let mut state = default_filter_state();
        state.set_sort(sort_fields::SECTOR_NAME, SortOrder::Asc);
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.rows[0].sector_code.as_deref(), Some("6201501"));
    }

    #[tokio::test]
    async fn test_page_three_of_twenty() {
        let db = memory_db().await;
        for i in 1..=20 {
            exec(
                &db,
                &format!(
                    "INSERT INTO a003_establishments (cnpj, cnpj_root, trade_name) \
                     VALUES ('{:014}', '{:08}', 'Empresa {:02}')",
                    i, i, i
                ),
            )
            .await;
        }

        let mut state = default_filter_state();
        state.set_page(3);
        let page = search(&db, &state).await.unwrap();
        assert_eq!(page.total_count, 20);
        assert_eq!(
            names(&page),
            vec![Some("Empresa 19".to_string()), Some("Empresa 20".to_string())]
        );
    }

    #[tokio::test]
    async fn test_options_only_include_present_codes() {
        let db = memory_db().await;
        seed_directory(&db).await;
        exec(&db, "INSERT INTO a004_sectors (code, description) VALUES ('0111301', 'Cultivo de arroz')").await;
        exec(
            &db,
            "INSERT INTO a003_establishments (cnpj, cnpj_root, sector_code) VALUES ('99999999000100', '99999999', '9999999')",
        )
        .await;

        let sectors = sector_options(&db).await.unwrap();
        let labels: Vec<_> = sectors.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["CNAE 9999999", "Desenvolvimento de software", "Padaria e confeitaria"]
        );

        let regions = region_options(&db).await.unwrap();
        assert_eq!(regions[0], FilterOption::new("3106200", "Belo Horizonte / MG"));
        assert_eq!(regions.len(), 2);
    }

    #[tokio::test]
    async fn test_counts() {
        let db = memory_db().await;
        seed_directory(&db).await;
        assert_eq!(count(&db, false).await.unwrap(), 3);
        assert_eq!(count(&db, true).await.unwrap(), 2);
    }
}
