use contracts::usecases::u101_lung_scan_analysis::{
    parse_prediction, PredictError, SelectedFile, IMAGE_FIELD, PREDICT_URL,
};
use gloo_net::http::Request;
use web_sys::{File, FormData};

/// Отправить снимок в сервис предсказаний и получить метку
///
/// One multipart POST, field `image` with the original file name.
/// No retry and no timeout: the browser decides when the request has failed.
pub async fn predict(file: &SelectedFile<File>) -> Result<String, PredictError> {
    let form = FormData::new()
        .map_err(|e| PredictError::Transport(format!("Failed to create form data: {:?}", e)))?;
    form.append_with_blob_and_filename(IMAGE_FIELD, &file.content, &file.name)
        .map_err(|e| PredictError::Transport(format!("Failed to attach file: {:?}", e)))?;

    let response = Request::post(PREDICT_URL)
        .body(form)
        .map_err(|e| PredictError::Transport(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| PredictError::Transport(e.to_string()))?;

    let status = response.status();
    let body = match response.text().await {
        Ok(text) => text,
        Err(e) if response.ok() => return Err(PredictError::Decode(e.to_string())),
        // the status alone is enough to report a failed request
        Err(_) => String::new(),
    };

    parse_prediction(status, &body)
}
