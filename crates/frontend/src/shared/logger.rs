use contracts::shared::logger::CreateLogRequest;
use gloo_net::http::Request;
use leptos::task::spawn_local;

use super::api_utils::api_url;

/// Отправить запись лога на хост (fire-and-forget)
///
/// Delivery problems only reach the browser console; they never surface in the UI.
pub fn log_to_server(category: &str, message: &str) {
    let req = CreateLogRequest::client(category, message);

    spawn_local(async move {
        let sent = match Request::post(&api_url("/api/logs")).json(&req) {
            Ok(request) => request.send().await,
            Err(e) => Err(e),
        };

        match sent {
            Ok(response) if response.ok() => {}
            Ok(response) => log::warn!("Log sink answered HTTP {}", response.status()),
            Err(e) => log::warn!("Failed to deliver client log: {}", e),
        }
    });
}
