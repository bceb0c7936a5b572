//! Async drivers binding a [`Feed`] to a paged fetch.
//!
//! The fetch argument is a closure so each screen can capture its own
//! repository and filter context; the drivers only decide page numbers
//! and route the outcome into the accumulator.

use crate::pagination::{Feed, Identified};
use crate::repository::Pagination;
use crate::services::ServiceResult;

/// One load-more step.
///
/// Returns `Ok(false)` without fetching when a request is already
/// outstanding or the feed is exhausted; this is the guard that makes
/// scroll-triggered calls idempotent. On failure the feed keeps its list
/// and cursor so the caller can retry the same page.
pub async fn advance<T, F, Fut>(feed: &mut Feed<T>, fetch: F) -> ServiceResult<bool>
where
    T: Identified,
    F: FnOnce(Pagination) -> Fut,
    Fut: Future<Output = ServiceResult<(usize, Vec<T>)>>,
{
    let Some(ticket) = feed.begin_fetch() else {
        return Ok(false);
    };
    let pagination = Pagination {
        page: ticket.page(),
        per_page: feed.per_page(),
    };
    match fetch(pagination).await {
        Ok((total, items)) => {
            feed.complete_fetch(ticket, total, items);
            Ok(true)
        }
        Err(err) => {
            log::error!("page {} fetch failed: {err}", pagination.page);
            feed.fail_fetch(ticket, err.to_string());
            Err(err)
        }
    }
}

/// Restarts the feed for a changed filter context and loads page 1.
pub async fn refresh<T, F, Fut>(feed: &mut Feed<T>, fetch: F) -> ServiceResult<bool>
where
    T: Identified,
    F: FnOnce(Pagination) -> Fut,
    Fut: Future<Output = ServiceResult<(usize, Vec<T>)>>,
{
    feed.reset_for_filter();
    advance(feed, fetch).await
}

/// Pages until the feed is exhausted, returning how many pages loaded.
///
/// A page that contributes no new records leaves the cursor where it
/// was; re-requesting it unprompted would loop against a server stuck
/// repeating itself, so the drain stops there as well.
pub async fn drain<T, F, Fut>(feed: &mut Feed<T>, mut fetch: F) -> ServiceResult<usize>
where
    T: Identified,
    F: FnMut(Pagination) -> Fut,
    Fut: Future<Output = ServiceResult<(usize, Vec<T>)>>,
{
    let mut pages = 0;
    loop {
        let page = feed.next_page();
        if !advance(feed, &mut fetch).await? {
            break;
        }
        pages += 1;
        if feed.next_page() == page && feed.has_more() {
            log::warn!("page {page} contributed no new records; stopping drain");
            break;
        }
    }
    Ok(pages)
}
