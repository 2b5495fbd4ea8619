pub mod a001_tender;
pub mod a003_establishment;
pub mod d400_overview;
pub mod logs;
pub mod lookups;
