//! Result selection: first downloadable candidate wins, otherwise the first candidate as preview-only.

use books_client::BookCandidate;

/// Outcome of one search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    NotFound,
    Downloadable(BookCandidate),
    PreviewOnly(BookCandidate),
}

impl SearchResult {
    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchResult::NotFound => "NotFound",
            SearchResult::Downloadable(_) => "Downloadable",
            SearchResult::PreviewOnly(_) => "PreviewOnly",
        }
    }
}

/// Scans candidates in service order. The first one flagged downloadable is returned as
/// `Downloadable`; if none is, index 0 is returned as `PreviewOnly` whether or not it has a
/// preview link; an empty list is `NotFound`.
pub fn select_result(mut candidates: Vec<BookCandidate>) -> SearchResult {
    if let Some(pos) = candidates.iter().position(|c| c.downloadable) {
        return SearchResult::Downloadable(candidates.swap_remove(pos));
    }
    match candidates.into_iter().next() {
        Some(first) => SearchResult::PreviewOnly(first),
        None => SearchResult::NotFound,
    }
}
