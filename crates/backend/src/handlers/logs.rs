use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::CreateLogRequest;

/// POST /api/logs
///
/// Записи из браузера уходят в общий tracing-вывод хоста (stdout и backend.log).
pub async fn create(Json(req): Json<CreateLogRequest>) -> StatusCode {
    tracing::warn!(
        target: "client",
        source = %req.source,
        category = %req.category,
        "{}",
        req.message
    );
    StatusCode::OK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_accepts_client_entry() {
        let req = CreateLogRequest::client(
            "u101_lung_scan_analysis",
            "Prediction for scan.png failed: request failed: TypeError: Failed to fetch",
        );
        assert_eq!(create(Json(req)).await, StatusCode::OK);
    }
}
