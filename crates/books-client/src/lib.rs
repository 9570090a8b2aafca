//! # Book lookup client
//!
//! One outbound search per call against a book-metadata endpoint (Google Books `volumes` by default).
//!
//! - [`BookLookup`]: the seam handlers depend on; tests substitute stubs.
//! - [`GoogleBooksClient`]: reqwest implementation with an explicit request timeout and no retries.
//! - [`BookCandidate`]: one search result with defaults resolved at parse time.
//!
//! Transport errors, timeouts and non-2xx statuses fail with [`LookupError::Unavailable`].
//! A 2xx body that does not have the expected shape yields an empty list, so callers report "not found".

mod candidate;
mod client;
mod config;
mod error;
mod wire;

pub use candidate::{BookCandidate, NO_TITLE, UNKNOWN_AUTHOR};
pub use client::{BookLookup, GoogleBooksClient};
pub use config::{BooksApiConfig, DEFAULT_BOOKS_API_URL, DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT_SECS};
pub use error::LookupError;
pub use wire::parse_candidates;
