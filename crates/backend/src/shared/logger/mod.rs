pub mod repository;

use contracts::shared::logger::SOURCE_SERVER;

/// Логирование события на сервере
///
/// # Примеры
/// ```ignore
/// logger::log("startup", "Сервер запущен");
/// ```
pub fn log(category: &str, message: &str) {
    repository::log_event(SOURCE_SERVER, category, message);
}
