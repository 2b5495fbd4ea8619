pub mod filter_inputs;
pub mod filter_panel;
pub mod page_header;
pub mod pagination_controls;
pub mod result_grid;
pub mod stat_card;

pub use filter_inputs::{DateRangeFilter, SearchInput, SelectFilter, SortSelect};
pub use filter_panel::FilterPanel;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use result_grid::ResultGrid;
pub use stat_card::StatCard;
