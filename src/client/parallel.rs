//! Parallel fetching utilities for paginated API requests.
//!
//! Once the first page reports `total_pages`, the remaining pages are fetched
//! concurrently. Results are stitched back together in page order so listings
//! come out exactly as the server orders them.

use std::future::Future;
use std::pin::Pin;

use futures::stream::{FuturesUnordered, StreamExt};
use log::debug;

use crate::error::Result;

/// Type alias for boxed futures used in parallel fetching
type PageFuture<T> = Pin<Box<dyn Future<Output = (usize, Result<Vec<T>>)> + Send>>;

/// Fetch all remaining pages in parallel after the first page.
///
/// Spawns requests for `remaining_pages`, up to `max_concurrent` at a time.
/// The first failing page aborts the whole fetch.
///
/// # Arguments
///
/// * `remaining_pages` - Page numbers to fetch (from `PagedResponse::remaining_pages()`)
/// * `fetch_page` - Async function that fetches a single page by number
/// * `max_concurrent` - Maximum number of concurrent requests
///
/// # Returns
///
/// All items from the remaining pages, ordered by page number.
pub async fn fetch_remaining_pages<T, F, Fut>(
    remaining_pages: Vec<usize>,
    fetch_page: F,
    max_concurrent: usize,
) -> Result<Vec<T>>
where
    T: Send + 'static,
    F: Fn(usize) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Vec<T>>> + Send + 'static,
{
    if remaining_pages.is_empty() {
        return Ok(Vec::new());
    }

    let max_concurrent = max_concurrent.max(1);
    debug!(
        "Fetching {} remaining pages with max {} concurrent",
        remaining_pages.len(),
        max_concurrent
    );

    let mut pages: Vec<(usize, Vec<T>)> = Vec::with_capacity(remaining_pages.len());
    let mut futures: FuturesUnordered<PageFuture<T>> = FuturesUnordered::new();
    let mut pending_pages = remaining_pages.into_iter();

    let make_future = |page: usize, f: &F| -> PageFuture<T> {
        let fut = f(page);
        Box::pin(async move {
            let result = fut.await;
            (page, result)
        })
    };

    // Seed initial batch up to max_concurrent
    for page in pending_pages.by_ref().take(max_concurrent) {
        futures.push(make_future(page, &fetch_page));
    }

    while let Some((page, result)) = futures.next().await {
        let items = result?;
        debug!("Page {} returned {} items", page, items.len());
        pages.push((page, items));

        if let Some(next_page) = pending_pages.next() {
            futures.push(make_future(next_page, &fetch_page));
        }
    }

    // Arrival order is arbitrary
    pages.sort_by_key(|(page, _)| *page);

    let all_items: Vec<T> = pages.into_iter().flat_map(|(_, items)| items).collect();
    debug!("Fetched {} total items from remaining pages", all_items.len());
    Ok(all_items)
}
