use serde::{Deserialize, Serialize};

/// Тело ответа с ошибкой, которое бэкенд отдаёт вместе с кодом 4xx/5xx
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
