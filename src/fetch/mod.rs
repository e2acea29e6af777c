// src/fetch/mod.rs
// =============================================================================
// This module handles everything about talking HTTP.
//
// Submodules:
// - config: RequestConfig (User-Agent + timeout), picked once per run
// - http: Fetcher, which GETs a URL and parses the body into a document
// =============================================================================

mod config;
mod http;

pub use config::{RequestConfig, DEFAULT_TIMEOUT};
pub use http::Fetcher;
