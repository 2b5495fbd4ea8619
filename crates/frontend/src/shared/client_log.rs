//! Отправка клиентских ошибок в серверный журнал (`POST /api/logs`).

use contracts::shared::logger::CreateLogRequest;
use wasm_bindgen_futures::spawn_local;

use crate::shared::http;
use crate::system::auth::storage;

/// Fire-and-forget; без сессии запись не отправляется
pub fn ship(category: &str, message: &str) {
    if storage::get_access_token().is_none() {
        return;
    }
    let request = CreateLogRequest {
        category: category.to_string(),
        message: message.to_string(),
    };
    spawn_local(async move {
        if let Err(e) = http::post_empty("/api/logs", &request).await {
            log::warn!("Failed to ship client log: {}", e);
        }
    });
}
