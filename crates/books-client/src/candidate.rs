use serde::Serialize;

/// Title shown when the service omits one.
pub const NO_TITLE: &str = "No Title";
/// Author line shown when the author list is empty.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One search result. Built once from the response and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookCandidate {
    pub title: String,
    pub authors: Vec<String>,
    /// Service flags a freely accessible document (PDF).
    pub downloadable: bool,
    /// Direct reading/download link.
    pub direct_link: Option<String>,
    pub preview_link: Option<String>,
}

impl BookCandidate {
    /// Comma-separated authors, or [`UNKNOWN_AUTHOR`].
    pub fn authors_display(&self) -> String {
        if self.authors.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            self.authors.join(", ")
        }
    }
}
