pub mod config;
pub mod data;
pub mod error;
pub mod logger;
pub mod lookup;
pub mod search;
