use axum::body::to_bytes;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;

use crate::shared::format::format_size;

/// Middleware для логирования HTTP запросов
///
/// Одна строка на запрос в консоль:
/// `HH:MM:SS | duration ms | response size | status method path`
/// и та же информация событием tracing (попадает в backend.log).
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(%method, path = uri.path(), "failed to read response body: {}", e);
            println!(
                "\x1b[33m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
                Local::now().format("%H:%M:%S"),
                start.elapsed().as_millis(),
                "error",
                parts.status.as_u16(),
                method,
                uri.path()
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let size = bytes.len();
    let duration = start.elapsed();

    // голубой для 2xx, коричневый для остальных
    let color_code = if parts.status.is_success() { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        duration.as_millis(),
        format_size(size),
        parts.status.as_u16(),
        method,
        uri.path()
    );

    if parts.status == StatusCode::NOT_FOUND || parts.status.is_server_error() {
        tracing::warn!(
            %method,
            path = uri.path(),
            status = parts.status.as_u16(),
            elapsed_ms = duration.as_millis() as u64,
            "request finished"
        );
    } else {
        tracing::debug!(
            %method,
            path = uri.path(),
            status = parts.status.as_u16(),
            size,
            elapsed_ms = duration.as_millis() as u64,
            "request finished"
        );
    }

    // Создаем новый ответ с прочитанным телом
    Response::from_parts(parts, Body::from(bytes))
}
