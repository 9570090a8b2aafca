use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::candidate::BookCandidate;
use crate::config::BooksApiConfig;
use crate::error::LookupError;
use crate::wire::parse_candidates;

/// Book search seam. One call is one network round trip; nothing is cached.
#[async_trait]
pub trait BookLookup: Send + Sync {
    /// Searches for `query` (non-empty, already trimmed) and returns candidates in relevance order.
    async fn search(&self, query: &str) -> Result<Vec<BookCandidate>, LookupError>;
}

/// Google Books volumes search over reqwest.
#[derive(Debug, Clone)]
pub struct GoogleBooksClient {
    client: Client,
    config: BooksApiConfig,
}

impl GoogleBooksClient {
    /// Builds the HTTP client with the configured timeout.
    pub fn new(config: BooksApiConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LookupError::Client)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BooksApiConfig {
        &self.config
    }
}

#[async_trait]
impl BookLookup for GoogleBooksClient {
    /// Sends `GET <endpoint>?q=<query>&maxResults=<n>[&key=<key>]` once, without retries.
    ///
    /// # Errors
    ///
    /// [`LookupError::Unavailable`] on transport failure, timeout or non-2xx status.
    /// A 2xx body that cannot be parsed is logged and returned as an empty list.
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint))]
    async fn search(&self, query: &str) -> Result<Vec<BookCandidate>, LookupError> {
        let max_results = self.config.max_results.to_string();
        let mut params = vec![("q", query), ("maxResults", max_results.as_str())];
        if let Some(ref key) = self.config.api_key {
            params.push(("key", key.as_str()));
        }

        info!(query = %query, max_results = self.config.max_results, "step: book search request");

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let preview: String = error_text.chars().take(200).collect();
            return Err(LookupError::Unavailable(format!(
                "book search API error ({}): {}",
                status, preview
            )));
        }

        let body = response.text().await?;
        let candidates = match parse_candidates(&body) {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(error = %e, body_len = body.len(), "Malformed book search response, treating as no results");
                Vec::new()
            }
        };

        info!(candidates = candidates.len(), "step: book search completed");
        Ok(candidates)
    }
}
