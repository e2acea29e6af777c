// src/fetch/http.rs
// =============================================================================
// This module downloads pages and parses them into HTML documents.
//
// Key functionality:
// - One reqwest Client per run, carrying the User-Agent and timeout
// - Only 200 OK counts as success; every other status is a failure
// - try_fetch() reports failures as a typed FetchError
// - fetch() logs the failure and degrades it to None
//
// No retries and no backoff: a failed page is simply skipped.
// =============================================================================

use reqwest::{Client, StatusCode};
use scraper::Html;
use tracing::warn;

use super::config::RequestConfig;
use crate::error::{FetchError, ScrapeError};

// Performs GET requests for the listing and every detail page
//
// Cloning is cheap: reqwest::Client is a reference-counted handle to a
// shared connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    // Builds the HTTP client from the request settings
    pub fn new(config: &RequestConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .default_headers(config.headers()?)
            .timeout(config.timeout)
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self { client })
    }

    // Fetches a page, returning the parsed document or why it failed
    pub async fn try_fetch(&self, url: &str) -> Result<Html, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| transport_error(url, source))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| transport_error(url, source))?;

        Ok(Html::parse_document(&body))
    }

    // Fetches a page, logging and swallowing any failure
    pub async fn fetch(&self, url: &str) -> Option<Html> {
        match self.try_fetch(url).await {
            Ok(document) => Some(document),
            Err(FetchError::Status { url, status }) => {
                warn!(%url, status = status.as_u16(), "HTTP error {}", status.as_u16());
                None
            }
            Err(FetchError::Transport { url, source }) => {
                warn!(%url, error = %source, "Request failed, check the URL: {}", url);
                None
            }
        }
    }
}

fn transport_error(url: &str, source: reqwest::Error) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        source,
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why does fetch() return Option instead of Result?
//    - Detail pages are best-effort: a missing page must not stop the batch
//    - The caller only needs to know "got a document or not"
//    - The listing page uses try_fetch() because there the failure matters
//
// 2. Why parse inside the fetcher?
//    - Callers always want a document, never the raw body
//    - Html is created after the last .await, so it is never held across
//      an await point
// -----------------------------------------------------------------------------
