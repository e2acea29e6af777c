// src/output/mod.rs
// =============================================================================
// This module serialises the scraped records.
//
// Submodules:
// - csv_sink: the 7-column CSV table
// =============================================================================

mod csv_sink;

pub use csv_sink::write_csv;
