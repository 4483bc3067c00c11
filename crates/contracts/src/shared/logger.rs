use serde::{Deserialize, Serialize};

/// Источник записи лога: браузер
pub const SOURCE_CLIENT: &str = "client";

/// DTO для создания новой записи лога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLogRequest {
    pub source: String,   // SOURCE_CLIENT для записей из браузера
    pub category: String,
    pub message: String,
}

impl CreateLogRequest {
    pub fn client(category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            source: SOURCE_CLIENT.to_string(),
            category: category.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_entry_wire_format() {
        let req = CreateLogRequest::client("u101_lung_scan_analysis", "request failed");
        assert_eq!(req.source, SOURCE_CLIENT);

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "source": "client",
                "category": "u101_lung_scan_analysis",
                "message": "request failed",
            })
        );
    }
}
