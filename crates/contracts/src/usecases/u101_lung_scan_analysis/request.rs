/// Endpoint of the external predictor
pub const PREDICT_URL: &str = "http://localhost:5000/predict";

/// Multipart field carrying the uploaded image
pub const IMAGE_FIELD: &str = "image";

/// `accept` filter for the file picker
pub const ACCEPTED_MIME: &str = "image/*";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predictor_wire_contract() {
        assert_eq!(PREDICT_URL, "http://localhost:5000/predict");
        assert!(PREDICT_URL.ends_with("/predict"));
        assert_eq!(IMAGE_FIELD, "image");
        assert_eq!(ACCEPTED_MIME, "image/*");
    }
}
