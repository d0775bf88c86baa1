use std::time::Duration;

use anyhow::{Context, Result};

use crate::aggregate::group_by_file;
use crate::config::SearchConfig;
use crate::models::{ErrorBody, FileSummary, ParsedQuery, SearchResponse};
use crate::payload::build_payload;

/// Client for the search backend. Holds the HTTP connection pool and the
/// request-shaping configuration; cheap to clone.
#[derive(Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { http, config })
    }

    /// Build a client around an existing `reqwest::Client` (shared pool).
    pub fn with_http_client(http: reqwest::Client, config: SearchConfig) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one search and aggregate the matched chunks into per-file
    /// summaries.
    ///
    /// Non-2xx responses fail with the server's error message, or a
    /// status-coded fallback when the body carries none. Network and
    /// parse failures propagate unchanged. No retries at this layer.
    pub async fn search(
        &self,
        query: &str,
        parsed: Option<&ParsedQuery>,
    ) -> Result<Vec<FileSummary>> {
        let payload = build_payload(query, parsed, &self.config);
        tracing::debug!(
            query = %payload.query,
            limit = payload.limit,
            has_filters = payload.filters.is_some(),
            "Sending search request"
        );

        let resp = self
            .http
            .post(self.config.search_url())
            .json(&payload)
            .send()
            .await
            .context("Failed to call search API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = match resp.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => format!("Search failed with status {status}"),
            };
            anyhow::bail!(message);
        }

        let body: SearchResponse = resp
            .json()
            .await
            .context("Failed to parse search response")?;

        let files = group_by_file(&body.results);
        tracing::info!(
            chunks = body.results.len(),
            files = files.len(),
            "Search completed"
        );
        Ok(files)
    }
}
