use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    /// Network failure, timeout or non-2xx status. Callers show a "try again later" message.
    #[error("Book lookup unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Unavailable(format!("request timed out: {}", e))
        } else {
            LookupError::Unavailable(e.to_string())
        }
    }
}
