pub mod cnpj;
pub mod compact_date;
pub mod error;
pub mod format;
pub mod logger;
pub mod options;
pub mod result_view;
pub mod rpc;
pub mod search;
