use serde::{Deserialize, Serialize};

/// Головная компания, ключ: корень CNPJ (8 цифр)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub cnpj_root: String,
    /// Razão social
    pub legal_name: String,
    /// Код porte, см. `enums::SizeBand`
    pub size_band: Option<String>,
    pub legal_nature: Option<String>,
    pub share_capital: Option<f64>,
}
