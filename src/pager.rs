//! Incremental page loading.
//!
//! A [`PaginatedFetcher`] owns an append-only sequence and a `loading` flag.
//! The page cursor is never stored: it is recomputed from the number of items
//! already accumulated, so it always points at the next unfetched page.

use crate::error::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Anything that can serve 1-based pages of `T`.
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<T>>;
}

/// What a call to [`PaginatedFetcher::load_next`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Another load was in flight; nothing was requested.
    Skipped,
    /// A page was fetched and appended.
    Loaded {
        page: u32,
        count: usize,
        /// The page was short, no further pages remain.
        exhausted: bool,
    },
}

#[derive(Debug)]
struct PagerState<T> {
    items: Vec<T>,
    loading: bool,
    exhausted: bool,
}

/// Items and flags read together under one lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub exhausted: bool,
}

#[derive(Debug)]
pub struct PaginatedFetcher<T> {
    page_size: u32,
    state: Mutex<PagerState<T>>,
}

/// `floor(len / page_size) + 1`
pub fn cursor_for(len: usize, page_size: u32) -> u32 {
    let page_size = page_size.max(1) as usize;
    (len / page_size) as u32 + 1
}

impl<T: Clone + Send> PaginatedFetcher<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            state: Mutex::new(PagerState {
                items: Vec::new(),
                loading: false,
                exhausted: false,
            }),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetch the next page and append it.
    ///
    /// At most one load runs per fetcher: a call made while another is in
    /// flight returns [`LoadOutcome::Skipped`] without touching the source.
    /// On error nothing is appended and `loading` is cleared so the caller
    /// can retry.
    pub async fn load_next<S>(&self, source: &S) -> Result<LoadOutcome>
    where
        S: PageSource<T> + ?Sized,
    {
        let page = {
            let mut state = self.state.lock().await;
            if state.loading {
                debug!("Load already in flight, skipping");
                return Ok(LoadOutcome::Skipped);
            }
            state.loading = true;
            cursor_for(state.items.len(), self.page_size)
        };

        debug!(page, per_page = self.page_size, "Fetching page");

        let result = source.fetch_page(page, self.page_size).await;

        let mut state = self.state.lock().await;
        state.loading = false;

        match result {
            Ok(items) => {
                let count = items.len();
                let exhausted = count < self.page_size as usize;
                state.items.extend(items);
                state.exhausted = exhausted;

                info!(
                    page,
                    count,
                    total = state.items.len(),
                    exhausted,
                    "Fetched page"
                );

                Ok(LoadOutcome::Loaded { page, count, exhausted })
            }
            Err(e) => {
                warn!(page, "Page fetch failed: {}", e);
                Err(e)
            }
        }
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.loading
    }

    /// The last resolved page was short.
    pub async fn is_exhausted(&self) -> bool {
        self.state.lock().await.exhausted
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn next_cursor(&self) -> u32 {
        cursor_for(self.len().await, self.page_size)
    }

    /// Copy of the accumulated items, in fetch order.
    pub async fn items(&self) -> Vec<T> {
        self.state.lock().await.items.clone()
    }

    /// Consistent view of items, `loading` and `exhausted`.
    pub async fn snapshot(&self) -> PageSnapshot<T> {
        let state = self.state.lock().await;
        PageSnapshot {
            items: state.items.clone(),
            loading: state.loading,
            exhausted: state.exhausted,
        }
    }
}
