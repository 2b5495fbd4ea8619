use serde::{Deserialize, Serialize};

/// Estabelecimento как хранится в БД
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Establishment {
    pub id: i64,
    /// 14 цифр, нормализован
    pub cnpj: String,
    /// Корень CNPJ → a002_companies
    pub cnpj_root: String,
    pub trade_name: Option<String>,
    /// Код situação cadastral, см. `enums::RegistrationStatus`
    pub status: Option<String>,
    /// YYYYMMDD
    pub activity_start: Option<i64>,
    pub sector_code: Option<String>,
    pub region_code: Option<String>,
    pub state: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}
