use crate::domain::a001_tender::Tender;
use serde::{Deserialize, Serialize};

/// Сколько последних лицитаций показывать на дашборде
pub const RECENT_TENDERS_LIMIT: u64 = 5;

/// Горизонт «закрываются скоро», дней
pub const CLOSING_SOON_DAYS: i64 = 7;

/// Ответ дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub open_tenders: u64,
    /// Открытые лицитации, закрывающиеся в ближайшие CLOSING_SOON_DAYS дней
    pub closing_soon: u64,
    pub establishments_total: u64,
    pub active_establishments: u64,
    pub recent_tenders: Vec<Tender>,
}
