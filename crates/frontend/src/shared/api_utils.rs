//! Helpers for calls to the host process (the backend crate).
//!
//! The predictor has its own fixed address, see `contracts::usecases::u101_lung_scan_analysis::PREDICT_URL`.

/// Port the host process listens on by default
pub const HOST_PORT: u16 = 3000;

/// Get the base URL of the host process
///
/// Same protocol and hostname as the page, port [`HOST_PORT`].
///
/// # Returns
/// - URL like "http://localhost:3000"
/// - Empty string if window is not available (relative URLs are used then)
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, HOST_PORT)
}

/// Build a full URL from a host path such as "/api/logs"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
