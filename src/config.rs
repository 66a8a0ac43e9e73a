use std::env;

/// Environment variable holding the compare backend's base URL,
/// e.g. `https://pawmatch.example.com/api`.
pub const API_BASE_URL_ENV: &str = "PAWMATCH_API_BASE_URL";

/// Endpoint for the single-image predictor.
///
/// The predict service only ever ran next to a local dev server, so the
/// address is hardcoded while the compare backend is configurable.
/// TODO: make the predict endpoint configurable like the compare backend
pub const PREDICT_ENDPOINT: &str = "http://127.0.0.1:8000/api/predict/";

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Base URL of the compare backend, without a trailing slash.
    /// `None` means the comparator cannot submit at all.
    pub api_base_url: Option<String>,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Self {
        let api_base_url = env::var(API_BASE_URL_ENV)
            .ok()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());

        Config { api_base_url }
    }

    /// Full URL of the compare endpoint, if a base URL is configured.
    pub fn compare_endpoint(&self) -> Option<String> {
        self.api_base_url
            .as_ref()
            .map(|base| format!("{base}/compare/"))
    }
}
