pub mod dto;

pub use dto::{OverviewResponse, CLOSING_SOON_DAYS, RECENT_TENDERS_LIMIT};
