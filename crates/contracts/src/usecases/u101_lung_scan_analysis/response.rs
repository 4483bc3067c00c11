use serde::{Deserialize, Serialize};

use super::error::PredictError;

/// Успешный ответ сервиса предсказаний
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Метка класса, показывается пользователю как есть (например, "Normal")
    pub prediction: String,
}

/// Тело ответа сервиса при ошибке (4xx/5xx)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictErrorResponse {
    pub error: String,
}

/// Interprets a finished predictor exchange.
///
/// Any status outside `200..300` is a failure. The server's `{"error": ...}`
/// body, when present, is kept as detail for the log. A success body must be a
/// JSON object with a string `prediction` field; extra fields are ignored.
pub fn parse_prediction(status: u16, body: &str) -> Result<String, PredictError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<PredictErrorResponse>(body)
            .ok()
            .map(|e| e.error);
        return Err(PredictError::Status {
            code: status,
            detail,
        });
    }

    let data: PredictResponse =
        serde_json::from_str(body).map_err(|e| PredictError::Decode(e.to_string()))?;

    Ok(data.prediction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        assert_eq!(
            parse_prediction(200, r#"{"prediction": "Normal"}"#),
            Ok("Normal".to_string())
        );
        assert_eq!(
            parse_prediction(200, r#"{"prediction": "Pneumonia", "confidence": 0.91}"#),
            Ok("Pneumonia".to_string())
        );
    }

    #[test]
    fn test_server_error_keeps_detail() {
        let err = parse_prediction(500, r#"{"error": "cannot identify image file"}"#).unwrap_err();
        assert_eq!(
            err,
            PredictError::Status {
                code: 500,
                detail: Some("cannot identify image file".to_string()),
            }
        );
        assert_eq!(
            err.to_string(),
            "predictor returned HTTP 500: cannot identify image file"
        );
    }

    #[test]
    fn test_error_status_with_unstructured_body() {
        let err = parse_prediction(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(
            err,
            PredictError::Status {
                code: 502,
                detail: None,
            }
        );
        assert_eq!(err.to_string(), "predictor returned HTTP 502");
    }

    #[test]
    fn test_success_status_with_unexpected_body() {
        assert!(matches!(
            parse_prediction(200, r#"{"label": "Normal"}"#),
            Err(PredictError::Decode(_))
        ));
        assert!(matches!(
            parse_prediction(200, ""),
            Err(PredictError::Decode(_))
        ));
    }
}
