// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging and the request settings (User-Agent, timeout)
// 3. Run the scrape pipeline (listing -> detail pages)
// 4. Write the CSV table
// 5. Exit with proper code (0 = success, 2 = error)
// =============================================================================

mod cli;          // src/cli.rs - command-line parsing
mod error;        // src/error.rs - FetchError / ScrapeError
mod fetch;        // src/fetch/ - RequestConfig and HTTP fetching
mod output;       // src/output/ - CSV writing
mod pipeline;     // src/pipeline/ - listing + concurrent enrichment
mod scrape;       // src/scrape/ - records and page parsing
mod telemetry;    // src/telemetry.rs - tracing subscriber
#[cfg(test)]
mod test_support; // src/test_support.rs - log capture for tests

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use fetch::{Fetcher, RequestConfig};
use std::time::Duration;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_telemetry();

    // Picked once here and passed down; every request in the run uses it
    let timeout = Duration::from_secs(cli.timeout);
    let config = match cli.user_agent {
        Some(user_agent) => RequestConfig::new(user_agent, timeout),
        None => RequestConfig::random(timeout),
    };
    let fetcher = Fetcher::new(&config)?;

    println!("🔍 Scraping exhibitor listing: {}", cli.url);
    println!("👷 Workers: {}", cli.workers);

    let records = pipeline::run(&cli.url, &fetcher, usize::from(cli.workers))
        .await
        .with_context(|| format!("scrape of {} failed", cli.url))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    output::write_csv(&records, &cli.output)?;

    let fully_enriched = records
        .iter()
        .filter(|r| !r.about_company.is_empty() || !r.categories.is_empty() || !r.press_releases.is_empty())
        .count();

    println!();
    println!("📊 Summary:");
    println!("   📋 Exhibitors: {}", records.len());
    println!("   📝 With details: {}", fully_enriched);
    println!("   💾 Written to: {}", cli.output.display());

    Ok(())
}
