use contracts::shared::logger::CreateLogRequest;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;

use super::api_utils::api_url;

/// Записать событие в консоль браузера и отправить его в журнал сервера
///
/// Отправка fire-and-forget: ошибка доставки только пишется в консоль.
pub fn log_event(category: &str, message: &str) {
    log::info!("[{}] {}", category, message);

    let request = CreateLogRequest::client(category, message);
    spawn_local(async move {
        let result = match Request::post(&api_url("/api/logs")).json(&request) {
            Ok(req) => req.send().await.map(|_| ()),
            Err(e) => Err(e),
        };
        if let Err(e) = result {
            log::warn!("Failed to send log entry: {}", e);
        }
    });
}
