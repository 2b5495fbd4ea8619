pub mod aggregate;

pub use aggregate::{Tender, TenderDetail, TenderDocument, TenderId, TenderProposal};

use crate::shared::search::{FilterState, SortOrder};

/// Имена фильтров списка лицитаций
pub mod filters {
    pub const STATUS: &str = "status";
    pub const MODALITY: &str = "modality";
}

/// Поля сортировки списка лицитаций
pub mod sort_fields {
    pub const OPENING_AT: &str = "opening_at";
    pub const NUMBER: &str = "number";
    pub const ESTIMATED_VALUE: &str = "estimated_value";
}

pub const DEFAULT_SORT_FIELD: &str = sort_fields::OPENING_AT;
pub const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Desc;

/// Состояние фильтров по умолчанию: новые лицитации сверху
pub fn default_filter_state() -> FilterState {
    FilterState::new(DEFAULT_SORT_FIELD, DEFAULT_SORT_ORDER)
}
