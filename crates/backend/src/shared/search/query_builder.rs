use chrono::NaiveDate;
use contracts::shared::cnpj::cnpj_search_fragment;
use contracts::shared::compact_date::to_compact;
use contracts::shared::search::{FilterState, SortOrder};
use sea_orm::Value;

use super::case_fold::{fold_case, fold_case_sql};

// ============================================================================
// Schema
// ============================================================================

/// Колонка с псевдонимом таблицы: "e.trade_name"
pub type ColumnRef = &'static str;

#[derive(Debug, Clone, Copy)]
pub struct JoinDef {
    pub table: &'static str,
    pub alias: &'static str,
    /// Условие соединения без "ON"
    pub on: &'static str,
}

/// Колонка для текстового поиска
#[derive(Debug, Clone, Copy)]
pub enum SearchColumn {
    /// Подстрока без учёта регистра
    Text(ColumnRef),
    /// Подстрока по цифрам (CNPJ хранится только цифрами)
    Digits(ColumnRef),
}

/// Фильтр на равенство: имя из запроса → колонка
#[derive(Debug, Clone, Copy)]
pub struct FilterDef {
    pub name: &'static str,
    pub column: ColumnRef,
}

/// Формат хранения даты
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateEncoding {
    /// INTEGER YYYYMMDD
    CompactInteger,
    /// TEXT ISO-8601, сравниваются первые 10 символов
    IsoText,
}

#[derive(Debug, Clone, Copy)]
pub struct DateColumnDef {
    pub column: ColumnRef,
    pub encoding: DateEncoding,
}

#[derive(Debug, Clone, Copy)]
pub struct SortDef {
    pub name: &'static str,
    pub column: ColumnRef,
}

/// Описание источника данных для поиска
#[derive(Debug, Clone, Copy)]
pub struct SearchSchema {
    pub table: &'static str,
    pub alias: &'static str,
    /// Выражения SELECT (с AS при необходимости)
    pub select: &'static [&'static str],
    pub joins: &'static [JoinDef],
    pub search_columns: &'static [SearchColumn],
    pub filters: &'static [FilterDef],
    pub date_column: Option<DateColumnDef>,
    pub sort_fields: &'static [SortDef],
    /// Имя сортировки, если запрошенное неизвестно
    pub default_sort: &'static str,
    /// Последний ключ сортировки, чтобы порядок страниц был стабильным
    pub tie_breaker: ColumnRef,
}

impl SearchSchema {
    pub fn filter_column(&self, name: &str) -> Option<ColumnRef> {
        self.filters.iter().find(|f| f.name == name).map(|f| f.column)
    }

    pub fn sort_column(&self, name: &str) -> ColumnRef {
        self.sort_fields
            .iter()
            .find(|s| s.name == name)
            .or_else(|| self.sort_fields.iter().find(|s| s.name == self.default_sort))
            .map(|s| s.column)
            .unwrap_or(self.tie_breaker)
    }
}

// ============================================================================
// Query
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Text(String),
    Integer(i64),
}

impl From<QueryParam> for Value {
    fn from(p: QueryParam) -> Self {
        match p {
            QueryParam::Text(s) => s.into(),
            QueryParam::Integer(i) => i.into(),
        }
    }
}

/// Готовые запросы страницы и общего количества с общими параметрами WHERE
#[derive(Debug, Clone)]
pub struct ComposedQuery {
    /// Запрос строк; LIMIT/OFFSET идут последними двумя параметрами
    pub rows_sql: String,
    pub count_sql: String,
    /// Параметры WHERE (общие для обоих запросов)
    pub params: Vec<QueryParam>,
    pub limit: u64,
    pub offset: u64,
}

impl ComposedQuery {
    pub fn rows_values(&self) -> Vec<Value> {
        let mut values: Vec<Value> = self.params.iter().cloned().map(Into::into).collect();
        values.push(clamp_i64(self.limit).into());
        values.push(clamp_i64(self.offset).into());
        values
    }

    pub fn count_values(&self) -> Vec<Value> {
        self.params.iter().cloned().map(Into::into).collect()
    }
}

/// SQLite принимает LIMIT/OFFSET как i64
fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Экранировать `%`, `_` и `\` для LIKE ... ESCAPE '\'
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

pub struct QueryBuilder<'a> {
    schema: &'a SearchSchema,
    state: &'a FilterState,
    page_size: u64,
}

impl<'a> QueryBuilder<'a> {
    pub fn new(schema: &'a SearchSchema, state: &'a FilterState, page_size: u64) -> Self {
        Self {
            schema,
            state,
            page_size,
        }
    }

    pub fn build(&self) -> ComposedQuery {
        let from_clause = self.build_from_clause();
        let (where_clause, params) = self.build_where_clause();
        let order_clause = self.build_order_clause();

        let rows_sql = format!(
            "SELECT {} FROM {} WHERE {} ORDER BY {} LIMIT ? OFFSET ?",
            self.schema.select.join(", "),
            from_clause,
            where_clause,
            order_clause
        );
        let count_sql = format!(
            "SELECT COUNT(*) AS count FROM {} WHERE {}",
            from_clause, where_clause
        );

        ComposedQuery {
            rows_sql,
            count_sql,
            params,
            limit: self.page_size,
            offset: self.state.offset(self.page_size),
        }
    }

    fn build_from_clause(&self) -> String {
        let mut from = format!("{} {}", self.schema.table, self.schema.alias);
        for join in self.schema.joins {
            from.push_str(&format!(
                " LEFT JOIN {} {} ON {}",
                join.table, join.alias, join.on
            ));
        }
        from
    }

    fn build_where_clause(&self) -> (String, Vec<QueryParam>) {
        let mut conditions: Vec<String> = Vec::new();
        let mut params: Vec<QueryParam> = Vec::new();

        // Search term
        let term = self.state.search_term.trim();
        if !term.is_empty() {
            let pattern = format!("%{}%", escape_like(&fold_case(term)));
            let digits = cnpj_search_fragment(term);
            let mut alternatives = Vec::new();
            for column in self.schema.search_columns {
                match column {
                    SearchColumn::Text(col) => {
                        alternatives.push(format!("{} LIKE ? ESCAPE '\\'", fold_case_sql(col)));
                        params.push(QueryParam::Text(pattern.clone()));
                    }
                    SearchColumn::Digits(col) => {
                        if let Some(d) = &digits {
                            alternatives.push(format!("{} LIKE ?", col));
                            params.push(QueryParam::Text(format!("%{}%", d)));
                        }
                    }
                }
            }
            if !alternatives.is_empty() {
                conditions.push(format!("({})", alternatives.join(" OR ")));
            }
        }

        // Field filters (unknown names are ignored)
        for (name, value) in &self.state.field_filters {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if let Some(column) = self.schema.filter_column(name) {
                conditions.push(format!("{} = ?", column));
                params.push(QueryParam::Text(value.to_string()));
            }
        }

        // Date range, both bounds inclusive
        if let Some(date) = &self.schema.date_column {
            if let Some(from) = self.state.date_range.from {
                let (expr, param) = date_bound(date, from);
                conditions.push(format!("{} >= ?", expr));
                params.push(param);
            }
            if let Some(to) = self.state.date_range.to {
                let (expr, param) = date_bound(date, to);
                conditions.push(format!("{} <= ?", expr));
                params.push(param);
            }
        }

        let where_clause = if conditions.is_empty() {
            "1=1".to_string()
        } else {
            conditions.join(" AND ")
        };
        (where_clause, params)
    }

    fn build_order_clause(&self) -> String {
        let column = self.schema.sort_column(&self.state.sort_field);
        let direction = match self.state.sort_order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        if column == self.schema.tie_breaker {
            format!("{} {}", column, direction)
        } else {
            format!(
                "{} {} NULLS LAST, {} ASC",
                column, direction, self.schema.tie_breaker
            )
        }
    }
}

fn date_bound(date: &DateColumnDef, value: NaiveDate) -> (String, QueryParam) {
    match date.encoding {
        DateEncoding::CompactInteger => (date.column.to_string(), QueryParam::Integer(to_compact(value))),
        DateEncoding::IsoText => (
            format!("substr({}, 1, 10)", date.column),
            QueryParam::Text(value.format("%Y-%m-%d").to_string()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: SearchSchema = SearchSchema {
        table: "items",
        alias: "i",
        select: &["i.id AS id", "i.name AS name", "o.title AS owner"],
        joins: &[JoinDef {
            table: "owners",
            alias: "o",
            on: "o.id = i.owner_id",
        }],
        search_columns: &[SearchColumn::Text("i.name"), SearchColumn::Digits("i.code")],
        filters: &[
            FilterDef {
                name: "kind",
                column: "i.kind",
            },
            FilterDef {
                name: "owner_kind",
                column: "o.kind",
            },
        ],
        date_column: Some(DateColumnDef {
            column: "i.started",
            encoding: DateEncoding::CompactInteger,
        }),
        sort_fields: &[
            SortDef {
                name: "name",
                column: "i.name",
            },
            SortDef {
                name: "owner",
                column: "o.title",
            },
        ],
        default_sort: "name",
        tie_breaker: "i.id",
    };

    fn state() -> FilterState {
        FilterState::new("name", SortOrder::Asc)
    }

    #[test]
    fn test_empty_state_selects_everything() {
        let q = QueryBuilder::new(&SCHEMA, &state(), 9).build();
        assert!(q.rows_sql.contains("WHERE 1=1 ORDER BY"));
        assert!(q.count_sql.ends_with("WHERE 1=1"));
        assert!(q.rows_sql.contains("LEFT JOIN owners o ON o.id = i.owner_id"));
        assert!(q.params.is_empty());
        assert_eq!((q.limit, q.offset), (9, 0));
    }

    #[test]
    fn test_search_term_is_escaped_and_lowercased() {
        let mut s = state();
        s.set_search_term("  100%_Pão ");
        let q = QueryBuilder::new(&SCHEMA, &s, 9).build();
        let folded = fold_case_sql("i.name");
        assert!(q.rows_sql.contains(&format!("({} LIKE ? ESCAPE '\\')", folded)));
        assert!(!q.rows_sql.contains("i.code LIKE"));
        assert_eq!(q.params, vec![QueryParam::Text("%100\\%\\_pão%".to_string())]);
    }

    #[test]
    fn test_digit_term_also_matches_code_column() {
        let mut s = state();
        s.set_search_term("12.345");
        let q = QueryBuilder::new(&SCHEMA, &s, 9).build();
        let folded = fold_case_sql("i.name");
        assert!(q.rows_sql.contains(&format!("{} LIKE ? ESCAPE '\\' OR i.code LIKE ?", folded)));
        assert_eq!(q.params[1], QueryParam::Text("%12345%".to_string()));
    }

    #[test]
    fn test_filters_use_qualified_columns_and_skip_unknown() {
        let mut s = state();
        s.set_filter("owner_kind", "05");
        s.set_filter("kind", "a");
        s.set_filter("bogus", "x");
        let q = QueryBuilder::new(&SCHEMA, &s, 9).build();
        // BTreeMap: kind, owner_kind
        assert!(q.count_sql.contains("WHERE i.kind = ? AND o.kind = ?"));
        assert!(!q.count_sql.contains("bogus"));
        assert_eq!(q.params.len(), 2);
    }

    #[test]
    fn test_compact_date_bounds() {
        let mut s = state();
        s.set_date_from(NaiveDate::from_ymd_opt(2020, 1, 1));
        s.set_date_to(NaiveDate::from_ymd_opt(2020, 12, 31));
        let q = QueryBuilder::new(&SCHEMA, &s, 9).build();
        assert!(q.count_sql.contains("i.started >= ? AND i.started <= ?"));
        assert_eq!(
            q.params,
            vec![QueryParam::Integer(20200101), QueryParam::Integer(20201231)]
        );
    }

    #[test]
    fn test_iso_date_bounds() {
        let schema = SearchSchema {
            date_column: Some(DateColumnDef {
                column: "i.opening_at",
                encoding: DateEncoding::IsoText,
            }),
            ..SCHEMA
        };
        let mut s = state();
        s.set_date_from(NaiveDate::from_ymd_opt(2024, 3, 5));
        let q = QueryBuilder::new(&schema, &s, 9).build();
        assert!(q.count_sql.contains("substr(i.opening_at, 1, 10) >= ?"));
        assert_eq!(q.params, vec![QueryParam::Text("2024-03-05".to_string())]);
    }

    #[test]
    fn test_order_by_joined_column_nulls_last() {
        let mut s = state();
        s.set_sort("owner", SortOrder::Desc);
        s.set_page(3);
        let q = QueryBuilder::new(&SCHEMA, &s, 9).build();
        assert!(q.rows_sql.contains("ORDER BY o.title DESC NULLS LAST, i.id ASC LIMIT ? OFFSET ?"));
        assert_eq!(q.offset, 18);
        assert_eq!(q.rows_values().len(), 2);
    }

    #[test]
    fn test_huge_page_clamps_offset() {
        let mut s = state();
        s.page = u64::MAX;
        let q = QueryBuilder::new(&SCHEMA, &s, 9).build();
        assert_eq!(q.offset, u64::MAX);
        let values = q.rows_values();
        assert_eq!(values[0], Value::from(9i64));
        assert_eq!(values[1], Value::from(i64::MAX));
    }

    #[test]
    fn test_unknown_sort_falls_back_to_default() {
        let mut s = state();
        s.set_sort("i.name; DROP TABLE items", SortOrder::Asc);
        let q = QueryBuilder::new(&SCHEMA, &s, 9).build();
        assert!(q.rows_sql.contains("ORDER BY i.name ASC NULLS LAST, i.id ASC"));
        assert!(!q.rows_sql.contains("DROP"));
    }
}
