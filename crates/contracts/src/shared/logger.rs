use serde::{Deserialize, Serialize};

/// Источник записи лога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    Client,
    Server,
}

impl LogSource {
    pub fn code(&self) -> &'static str {
        match self {
            LogSource::Client => "client",
            LogSource::Server => "server",
        }
    }

    /// Неизвестный источник считается серверным
    pub fn from_code(code: &str) -> Self {
        match code {
            "client" => LogSource::Client,
            _ => LogSource::Server,
        }
    }
}

/// Запись лога системы
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: i64,
    pub timestamp: String,
    pub source: LogSource,
    pub category: String,
    pub message: String,
}

/// Запись лога, которую присылает фронтенд
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub category: String,
    pub message: String,
}
