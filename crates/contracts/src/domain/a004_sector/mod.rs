use serde::{Deserialize, Serialize};

/// Вид деятельности (CNAE)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sector {
    pub code: String,
    pub description: String,
}
