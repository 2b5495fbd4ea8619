use serde::{Deserialize, Serialize};

/// Запрос уникальных значений колонки (таблица и колонка проверяются по белому списку)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistinctValuesRequest {
    pub table: String,
    pub column: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistinctValuesResponse {
    pub values: Vec<String>,
}
