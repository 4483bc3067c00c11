use thiserror::Error;

/// Сбой запроса к сервису предсказаний. Детали попадают только в лог.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("predictor returned HTTP {code}{}", detail_suffix(.detail))]
    Status { code: u16, detail: Option<String> },

    #[error("failed to decode predictor response: {0}")]
    Decode(String),
}

/// Ошибка, которую видит пользователь. `Display` совпадает с текстом в UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("Please select a lung image to analyze.")]
    NoFileSelected,

    #[error("Error analyzing the image. Please try again.")]
    AnalysisFailed,
}

impl From<&PredictError> for UploadError {
    fn from(_: &PredictError) -> Self {
        UploadError::AnalysisFailed
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to create preview: {0}")]
pub struct PreviewError(pub String);
