// src/pipeline/mod.rs
// =============================================================================
// This module runs the whole scrape: listing first, then every detail page
// through a bounded pool of concurrent workers.
// =============================================================================

mod orchestrator;

pub use orchestrator::{run, DEFAULT_WORKERS};
