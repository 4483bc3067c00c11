pub mod error;
pub mod preview;
pub mod request;
pub mod response;
pub mod session;

pub use error::{PredictError, PreviewError, UploadError};
pub use preview::{PreviewHandle, PreviewSource, SelectedFile};
pub use request::{ACCEPTED_MIME, IMAGE_FIELD, PREDICT_URL};
pub use response::{parse_prediction, PredictErrorResponse, PredictResponse};
pub use session::{Dispatch, Outcome, Phase, SessionEvent, UploadSession};

use crate::usecases::common::UseCaseMetadata;

pub struct LungScanAnalysis;

impl UseCaseMetadata for LungScanAnalysis {
    fn usecase_index() -> &'static str {
        "u101"
    }

    fn usecase_name() -> &'static str {
        "lung_scan_analysis"
    }

    fn display_name() -> &'static str {
        "Lung Image Analysis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usecase_names() {
        assert_eq!(LungScanAnalysis::full_name(), "u101_lung_scan_analysis");
        assert_eq!(LungScanAnalysis::display_name(), "Lung Image Analysis");
    }
}
