//! Search endpoint settings.

use std::time::Duration;

pub const DEFAULT_BOOKS_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";
pub const DEFAULT_MAX_RESULTS: u32 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooksApiConfig {
    /// Search endpoint; receives `q` and `maxResults` query parameters.
    pub endpoint: String,
    /// Optional API key sent as the `key` query parameter.
    pub api_key: Option<String>,
    pub max_results: u32,
    /// Whole-request timeout (connect, send, body).
    pub timeout: Duration,
}

impl Default for BooksApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_BOOKS_API_URL.to_string(),
            api_key: None,
            max_results: DEFAULT_MAX_RESULTS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl BooksApiConfig {
    /// Default settings against another endpoint (e.g. a mock server).
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
