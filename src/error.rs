// src/error.rs
// =============================================================================
// Error types shared by the fetch, pipeline and output modules.
//
// Two levels:
// - FetchError: one HTTP GET went wrong (bad status or transport failure)
// - ScrapeError: the whole run cannot continue (listing unavailable,
//   HTTP client could not be built, CSV could not be written)
//
// Detail-page failures never become a ScrapeError; the enricher degrades
// them to empty fields instead.
// =============================================================================

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

// A single failed GET
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with something other than 200 OK
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: StatusCode },

    /// Malformed URL, connection failure, timeout, unreadable body
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

// Failures that abort the run
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid listing URL '{url}': {source}")]
    InvalidListingUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("listing page unavailable: {0}")]
    ListingUnavailable(#[from] FetchError),

    #[error("User-Agent is not a valid header value: {0}")]
    InvalidUserAgent(#[from] reqwest::header::InvalidHeaderValue),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to write CSV to {path:?}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
