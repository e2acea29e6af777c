// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Every flag has a default, so running the binary with no arguments
// scrapes the built-in listing into ./output.csv with 10 workers.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::fetch::DEFAULT_TIMEOUT;
use crate::pipeline::DEFAULT_WORKERS;

pub const DEFAULT_LISTING_URL: &str =
    "https://n1b.goexposoftware.com/events/ss24/goExpo/exhibitor/listExhibitorProfiles.php";

#[derive(Parser, Debug)]
#[command(
    name = "exhibitor-scraper",
    version = "0.1.0",
    about = "Scrape a trade-show exhibitor listing into a CSV file",
    long_about = "exhibitor-scraper fetches an exhibitor listing page, follows every exhibitor's \
                  detail link to collect its description, categories and press releases, and \
                  writes the result as a CSV table."
)]
pub struct Cli {
    /// Exhibitor listing page to start from
    #[arg(long, default_value = DEFAULT_LISTING_URL)]
    pub url: String,

    /// Where to write the CSV table (overwritten if it exists)
    #[arg(long, short, default_value = "output.csv")]
    pub output: PathBuf,

    /// Number of detail pages fetched at the same time
    #[arg(long, short, default_value_t = DEFAULT_WORKERS as u16, value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: u16,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Send this User-Agent instead of a randomly chosen browser one
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Also print the scraped records as JSON on stdout
    #[arg(long)]
    pub json: bool,
}
