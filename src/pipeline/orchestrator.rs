// src/pipeline/orchestrator.rs
// =============================================================================
// This module wires the fetcher, listing parser and enricher together.
//
// How it works:
// 1. Validate the listing URL and derive the base URL from it
// 2. Fetch the listing page once (failure here aborts the run)
// 3. Parse the listing into partial records
// 4. Enrich every record, at most `worker_count` detail fetches at a time
// 5. Return the records in listing order
//
// Concurrency:
// - All records are queued at once; only `worker_count` run at a time
// - buffer_unordered() refills a slot as soon as any worker finishes, so
//   one slow page only holds its own slot; results carry their index and
//   are put back in submission order at the end
// - Workers share nothing mutable: each owns its record, and the Fetcher
//   is only read
// =============================================================================

use futures::stream::{self, StreamExt};
use std::future::Future;
use tracing::info;
use url::Url;

use crate::error::ScrapeError;
use crate::fetch::Fetcher;
use crate::scrape::{derive_base_url, enrich, parse_listing, ExhibitorRecord};

// Worker pool size used when the caller doesn't override it
pub const DEFAULT_WORKERS: usize = 10;

// Maps `f` over `items` with at most `worker_count` futures in flight,
// returning results in the same order as `items`
//
// A worker_count of 0 is treated as 1.
pub async fn enrich_all<T, R, F, Fut>(items: Vec<T>, worker_count: usize, mut f: F) -> Vec<R>
where
    F: FnMut(T) -> Fut,
    Fut: Future<Output = R>,
{
    let mut indexed: Vec<(usize, R)> = stream::iter(items.into_iter().enumerate())
        .map(|(index, item)| {
            let work = f(item);
            async move { (index, work.await) }
        })
        .buffer_unordered(worker_count.max(1))
        .collect()
        .await;

    indexed.sort_unstable_by_key(|(index, _)| *index);
    indexed.into_iter().map(|(_, result)| result).collect()
}

// Scrapes the listing at `listing_url` into fully enriched records
pub async fn run(
    listing_url: &str,
    fetcher: &Fetcher,
    worker_count: usize,
) -> Result<Vec<ExhibitorRecord>, ScrapeError> {
    Url::parse(listing_url).map_err(|source| ScrapeError::InvalidListingUrl {
        url: listing_url.to_string(),
        source,
    })?;

    let base_url = derive_base_url(listing_url);

    let partials = {
        let listing = fetcher.try_fetch(listing_url).await?;
        parse_listing(&listing, &base_url)
    };

    info!(
        exhibitors = partials.len(),
        workers = worker_count,
        "Parsed listing page, fetching detail pages"
    );

    let records = enrich_all(partials, worker_count, |partial| enrich(fetcher, partial)).await;

    Ok(records)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why a stream instead of spawning tasks?
//    - Every detail fetch is independent and the work is I/O bound
//    - buffer_unordered(N) keeps N futures running and starts the next
//      queued one (FIFO) the moment any of them finishes, which is the
//      "fixed-size worker pool" we need
//    - buffered(N) would not do: it counts finished-but-not-yet-yielded
//      results against N, so a slow first page stalls every slot
//    - No JoinHandles, no channels, and the futures may borrow the Fetcher
//
// 2. Why is the listing document inside its own block?
//    - scraper::Html is not Send; dropping it before the next .await keeps
//      the future free to move between runtime threads
// -----------------------------------------------------------------------------
