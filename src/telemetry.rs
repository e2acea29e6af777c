// src/telemetry.rs
// =============================================================================
// Logging setup.
//
// Diagnostics (HTTP errors, bad URLs, one line per enriched exhibitor) go
// through `tracing` to stdout. The level is taken from RUST_LOG, e.g.
//
//   RUST_LOG=debug exhibitor-scraper
//
// and defaults to "info".
// =============================================================================

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,exhibitor_scraper=info";

pub fn init_telemetry() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
