pub mod repository;

use repository::log_event_internal;

/// Записать событие сервера в system_log (асинхронно, ошибки только в tracing)
pub fn log(category: &str, message: &str) {
    log_event_internal("server", category, message);
}
