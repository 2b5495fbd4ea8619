pub mod a001_tender;
pub mod a003_establishment;
