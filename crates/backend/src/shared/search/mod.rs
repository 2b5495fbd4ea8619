//! Сборка и выполнение постраничных поисковых запросов.
//!
//! Схема (`SearchSchema`) статически описывает, какие колонки можно искать,
//! фильтровать и сортировать. Имена из запроса клиента сопоставляются только
//! со схемой, в SQL попадают лишь значения через параметры.

pub mod case_fold;
pub mod executor;
pub mod query_builder;

pub use executor::execute_search;
pub use query_builder::{
    ColumnRef, ComposedQuery, DateColumnDef, DateEncoding, FilterDef, JoinDef, QueryBuilder,
    QueryParam, SearchColumn, SearchSchema, SortDef,
};
