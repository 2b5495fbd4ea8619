pub mod aggregate;
pub mod dto;

pub use aggregate::Establishment;
pub use dto::EstablishmentRow;

use crate::shared::search::{FilterState, SortOrder};

/// Имена фильтров справочника
pub mod filters {
    pub const SECTOR: &str = "sector";
    pub const REGION: &str = "region";
    pub const STATE: &str = "state";
    pub const SIZE_BAND: &str = "size_band";
    pub const STATUS: &str = "status";
}

/// Поля сортировки справочника
pub mod sort_fields {
    pub const TRADE_NAME: &str = "trade_name";
    /// Поле головной компании (JOIN)
    pub const LEGAL_NAME: &str = "legal_name";
    pub const ACTIVITY_START: &str = "activity_start";
    /// Поле справочника CNAE (JOIN)
    pub const SECTOR_NAME: &str = "sector_name";
}

pub const DEFAULT_SORT_FIELD: &str = sort_fields::TRADE_NAME;
pub const DEFAULT_SORT_ORDER: SortOrder = SortOrder::Asc;

pub fn default_filter_state() -> FilterState {
    FilterState::new(DEFAULT_SORT_FIELD, DEFAULT_SORT_ORDER)
}
