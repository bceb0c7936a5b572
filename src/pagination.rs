//! Incremental page accumulation for the console's scrollable lists.
//!
//! Every list screen (users, posts, coin-trader history, the follower
//! modal tabs, ...) renders the same way: an ordered, de-duplicated list
//! that grows one page at a time as the operator scrolls. [`Feed`] holds
//! that state and enforces its invariants in one place instead of each
//! screen re-implementing the merge.

use std::collections::HashSet;

use serde::Serialize;

/// Items per page requested by default across the console.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Identity used for de-duplication on merge.
///
/// Platform records carry a `_id` string; entities expose it here so the
/// accumulator stays agnostic of their shape.
pub trait Identified {
    fn ident(&self) -> &str;
}

/// Where a feed currently is in its load cycle, for rendering decisions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedPhase {
    /// Nothing outstanding; list is renderable as-is.
    Idle,
    /// First page of the current filter context is outstanding.
    LoadingFirst,
    /// A continuation page is outstanding.
    LoadingMore,
    /// The last fetch failed; the same page can be re-requested.
    Failed,
}

/// Handle for one outstanding fetch.
///
/// Carries the requested page and the feed epoch at issue time so that a
/// response arriving after a filter reset is recognized as stale and
/// dropped rather than merged into the wrong context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    page: usize,
    epoch: u64,
}

impl FetchTicket {
    /// Page number this ticket was issued for.
    pub fn page(&self) -> usize {
        self.page
    }
}

/// Snapshot of the state a list view needs to render.
#[derive(Debug, Serialize)]
pub struct FeedView<'a, T> {
    pub items: &'a [T],
    pub total: usize,
    pub loading: bool,
    pub initial_loading: bool,
    pub has_more: bool,
}

/// De-duplicated, order-preserving accumulator over a paged remote source.
///
/// Pages are 1-based. Page 1 always replaces the list (a late first page
/// after a reset must not append to stale content); later pages append
/// only records whose id is not already present, preserving arrival order.
#[derive(Debug)]
pub struct Feed<T> {
    items: Vec<T>,
    seen: HashSet<String>,
    total: usize,
    page: usize,
    per_page: usize,
    has_more: bool,
    loading: bool,
    initial_loading: bool,
    last_error: Option<String>,
    epoch: u64,
}

impl<T: Identified> Feed<T> {
    pub fn new(per_page: usize) -> Self {
        Self {
            items: Vec::new(),
            seen: HashSet::new(),
            total: 0,
            page: 1,
            per_page,
            has_more: true,
            loading: false,
            initial_loading: true,
            last_error: None,
            epoch: 0,
        }
    }

    /// Discards the accumulated list for a new filter context.
    ///
    /// Bumps the epoch so completions of fetches issued before the reset
    /// are dropped instead of corrupting the fresh list.
    pub fn reset_for_filter(&mut self) {
        self.items.clear();
        self.seen.clear();
        self.total = 0;
        self.page = 1;
        self.has_more = true;
        self.loading = false;
        self.initial_loading = true;
        self.last_error = None;
        self.epoch += 1;
    }

    /// Marks the next page as outstanding and returns its ticket.
    ///
    /// Returns `None` while a fetch is already outstanding or when the
    /// feed has reached the end of data; callers bound to scroll events
    /// rely on this as the correctness guard against redundant requests.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.loading || !self.has_more {
            return None;
        }
        self.loading = true;
        self.initial_loading = self.page == 1;
        self.last_error = None;
        Some(FetchTicket {
            page: self.page,
            epoch: self.epoch,
        })
    }

    /// Merges a completed page into the list.
    ///
    /// A ticket issued before the last `reset_for_filter` is stale and
    /// ignored. `total` is the server-reported count for the current
    /// filter; it is advisory and only feeds the `has_more` computation.
    pub fn complete_fetch(&mut self, ticket: FetchTicket, total: usize, items: Vec<T>) {
        if ticket.epoch != self.epoch {
            log::debug!(
                "dropping stale page {} (epoch {} != {})",
                ticket.page,
                ticket.epoch,
                self.epoch
            );
            return;
        }

        let full_page = items.len() == self.per_page;
        let non_empty = !items.is_empty();

        if ticket.page == 1 {
            self.items.clear();
            self.seen.clear();
        }

        let mut merged = 0usize;
        for item in items {
            if self.seen.insert(item.ident().to_owned()) {
                self.items.push(item);
                merged += 1;
            }
        }

        self.total = total;
        self.has_more = self.items.len() < total && full_page && non_empty;
        if ticket.page == 1 || merged > 0 {
            self.page = ticket.page + 1;
        }
        self.loading = false;
        self.initial_loading = false;
    }

    /// Records a failed fetch without touching the list or cursor.
    ///
    /// The feed stays resumable: a subsequent `begin_fetch` re-issues the
    /// same page.
    pub fn fail_fetch(&mut self, ticket: FetchTicket, message: impl Into<String>) {
        if ticket.epoch != self.epoch {
            log::debug!("dropping stale failure for page {}", ticket.page);
            return;
        }
        self.loading = false;
        self.initial_loading = false;
        self.last_error = Some(message.into());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Server-reported total for the current filter context.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Next page to request.
    pub fn next_page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn phase(&self) -> FeedPhase {
        if self.loading {
            if self.initial_loading {
                FeedPhase::LoadingFirst
            } else {
                FeedPhase::LoadingMore
            }
        } else if self.last_error.is_some() {
            FeedPhase::Failed
        } else {
            FeedPhase::Idle
        }
    }

    /// Render snapshot for a list view.
    pub fn view(&self) -> FeedView<'_, T> {
        FeedView {
            items: &self.items,
            total: self.total,
            loading: self.loading,
            initial_loading: self.initial_loading,
            has_more: self.has_more,
        }
    }
}
