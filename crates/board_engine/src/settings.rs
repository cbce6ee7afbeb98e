use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Scheme, host and port of the job board, e.g. `http://127.0.0.1:8000`.
    pub base_url: String,
    /// Path of the page whose triggers are driven, resolved against `base_url`.
    pub page_path: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_page_bytes: u64,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            page_path: "/".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_page_bytes: 5 * 1024 * 1024,
        }
    }
}
