//! Backend endpoint configuration

use std::sync::OnceLock;

static API_URL: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
pub fn init_api_url(url: String) {
    API_URL.set(url).ok();
}

/// Get the configured API base URL
pub fn api_url() -> &'static str {
    API_URL
        .get()
        .map(|s| s.as_str())
        .unwrap_or("http://localhost:3001")
}
