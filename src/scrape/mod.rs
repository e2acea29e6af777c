// src/scrape/mod.rs
// =============================================================================
// This module contains the page-level scraping logic.
//
// Submodules:
// - record: PartialRecord / DetailFields / ExhibitorRecord
// - listing: listing page -> partial records, plus base URL derivation
// - detail: detail page -> enrichment fields, and the async enrich step
//
// Parsing is pure (document in, values out); only detail::enrich touches
// the network, through the Fetcher.
// =============================================================================

mod detail;
mod listing;
pub(crate) mod record;

pub use detail::enrich;
pub use listing::{derive_base_url, parse_listing};
pub use record::ExhibitorRecord;
