use contracts::shared::search::ResultPage;
use sea_orm::{ConnectionTrait, DatabaseBackend, FromQueryResult, Statement};

use super::query_builder::ComposedQuery;

/// Выполнить запрос страницы и запрос количества параллельно
pub async fn execute_search<C, M>(db: &C, query: &ComposedQuery) -> anyhow::Result<ResultPage<M>>
where
    C: ConnectionTrait,
    M: FromQueryResult,
{
    let rows_stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        &query.rows_sql,
        query.rows_values(),
    );
    let count_stmt = Statement::from_sql_and_values(
        DatabaseBackend::Sqlite,
        &query.count_sql,
        query.count_values(),
    );

    let (rows, count_row) = tokio::try_join!(
        M::find_by_statement(rows_stmt).all(db),
        db.query_one(count_stmt),
    )?;

    let total_count: i64 = match count_row {
        Some(row) => row.try_get("", "count")?,
        None => 0,
    };

    Ok(ResultPage {
        rows,
        total_count: total_count.max(0) as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::test_support::{exec, memory_db};
    use crate::shared::search::{QueryBuilder, SearchSchema, SortDef};
    use contracts::shared::search::{FilterState, SortOrder};

    #[derive(Debug, FromQueryResult)]
    struct SectorRow {
        code: String,
    }

    const SECTORS: SearchSchema = SearchSchema {
        table: "a004_sectors",
        alias: "s",
        select: &["s.code AS code"],
        joins: &[],
        search_columns: &[],
        filters: &[],
        date_column: None,
        sort_fields: &[SortDef {
            name: "code",
            column: "s.code",
        }],
        default_sort: "code",
        tie_breaker: "s.code",
    };

    #[tokio::test]
    async fn test_page_and_count() {
        let db = memory_db().await;
        for i in 1..=20 {
            exec(
                &db,
                &format!("INSERT INTO a004_sectors (code, description) VALUES ('{:02}', 'S')", i),
            )
            .await;
        }

        let mut state = FilterState::new("code", SortOrder::Asc);
        state.set_page(3);
        let query = QueryBuilder::new(&SECTORS, &state, 9).build();
        let page: ResultPage<SectorRow> = execute_search(&db, &query).await.unwrap();

        assert_eq!(page.total_count, 20);
        let codes: Vec<_> = page.rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["19", "20"]);
    }
}
