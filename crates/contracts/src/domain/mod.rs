pub mod a001_tender;
pub mod a002_company;
pub mod a003_establishment;
pub mod a004_sector;
pub mod a005_region;
