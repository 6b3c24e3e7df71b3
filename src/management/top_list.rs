//! Pagination state for the "top tracks" / "top artists" listings.
//!
//! [`TopListManager`] owns the active [`Query`], the page cursor, the records
//! accumulated so far and the [`FetchStatus`]. All of it lives behind one async
//! mutex, so a reader always sees a consistent state. The lock is released while
//! a page is being fetched; each request carries the generation it was issued
//! for, and a response whose generation is no longer current is dropped.
//!
//! ```text
//! Idle --request--> Loading --full page--> Idle
//!                           --short page--> Exhausted
//!                           --failure----> Failed
//! any  --set_query--> Idle (cleared)
//! ```

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{
    config::DEFAULT_PAGE_SIZE,
    formatter,
    management::CredentialProvider,
    spotify::{FetchError, top::PageFetcher},
    types::{FetchStatus, NormalizedRecord, Query},
};

/// What a call to [`TopListManager::request_next_page`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOutcome {
    /// Status was not `Idle`; nothing happened.
    Ignored,
    /// No credential was available; no request was issued.
    NoCredential,
    /// The page was appended.
    Loaded { added: usize },
    /// The query changed while the request was in flight; the response was dropped.
    Discarded,
    /// The request failed; the query is now `Failed`.
    Failed(FetchError),
}

/// Consistent copy of the listing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopListSnapshot {
    pub query: Query,
    pub records: Vec<NormalizedRecord>,
    pub cursor: u32,
    pub status: FetchStatus,
}

#[derive(Debug)]
struct TopListState {
    query: Query,
    records: Vec<NormalizedRecord>,
    cursor: u32,
    status: FetchStatus,
    generation: u64,
}

impl TopListState {
    fn new(query: Query) -> Self {
        Self {
            query,
            records: Vec::new(),
            cursor: 0,
            status: FetchStatus::Idle,
            generation: 0,
        }
    }
}

/// Tag captured when a request starts.
struct PendingRequest {
    generation: u64,
    query: Query,
    offset: u32,
}

pub struct TopListManager<F, C> {
    state: Arc<Mutex<TopListState>>,
    fetcher: Arc<F>,
    credentials: Arc<C>,
    page_size: u32,
}

impl<F, C> Clone for TopListManager<F, C> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            fetcher: Arc::clone(&self.fetcher),
            credentials: Arc::clone(&self.credentials),
            page_size: self.page_size,
        }
    }
}

impl<F, C> TopListManager<F, C>
where
    F: PageFetcher,
    C: CredentialProvider,
{
    pub fn new(query: Query, fetcher: F, credentials: C) -> Self {
        Self::with_page_size(query, fetcher, credentials, DEFAULT_PAGE_SIZE)
    }

    /// A `page_size` of 0 is raised to 1.
    pub fn with_page_size(query: Query, fetcher: F, credentials: C, page_size: u32) -> Self {
        Self {
            state: Arc::new(Mutex::new(TopListState::new(query))),
            fetcher: Arc::new(fetcher),
            credentials: Arc::new(credentials),
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Replaces the query and clears everything derived from the old one.
    ///
    /// Does not fetch; callers follow up with [`request_next_page`](Self::request_next_page).
    pub async fn set_query(&self, query: Query) {
        let mut state = self.state.lock().await;
        state.query = query;
        state.records.clear();
        state.cursor = 0;
        state.status = FetchStatus::Idle;
        state.generation = state.generation.wrapping_add(1);
    }

    /// Fetches the page at the cursor and appends it.
    ///
    /// Only acts while `Idle`. Calls made while a request is in flight, or
    /// after the query is `Exhausted` or `Failed`, return
    /// [`RequestOutcome::Ignored`] without touching anything.
    pub async fn request_next_page(&self) -> RequestOutcome {
        let pending = {
            let mut state = self.state.lock().await;
            if state.status != FetchStatus::Idle {
                return RequestOutcome::Ignored;
            }
            state.status = FetchStatus::Loading;
            PendingRequest {
                generation: state.generation,
                query: state.query,
                offset: state.cursor,
            }
        };

        let Some(credential) = self.credentials.credential().await else {
            let mut state = self.state.lock().await;
            if state.generation == pending.generation {
                state.status = FetchStatus::Idle;
            }
            return RequestOutcome::NoCredential;
        };

        let result = self
            .fetcher
            .fetch_page(&pending.query, self.page_size, pending.offset, &credential)
            .await;

        let mut state = self.state.lock().await;
        if state.generation != pending.generation {
            return RequestOutcome::Discarded;
        }

        match result {
            Ok(page) => {
                let records = formatter::normalize(&page, pending.query.result_kind);
                let added = records.len();
                state.records.extend(records);
                state.cursor += added as u32;
                state.status = if added >= self.page_size as usize {
                    FetchStatus::Idle
                } else {
                    FetchStatus::Exhausted
                };
                RequestOutcome::Loaded { added }
            }
            Err(e) => {
                state.status = FetchStatus::Failed;
                RequestOutcome::Failed(e)
            }
        }
    }

    pub async fn snapshot(&self) -> TopListSnapshot {
        let state = self.state.lock().await;
        TopListSnapshot {
            query: state.query,
            records: state.records.clone(),
            cursor: state.cursor,
            status: state.status,
        }
    }

    pub async fn query(&self) -> Query {
        self.state.lock().await.query
    }

    pub async fn status(&self) -> FetchStatus {
        self.state.lock().await.status
    }

    pub async fn cursor(&self) -> u32 {
        self.state.lock().await.cursor
    }

    pub async fn records(&self) -> Vec<NormalizedRecord> {
        self.state.lock().await.records.clone()
    }

    /// Records from position `from` onwards, e.g. the ones not rendered yet.
    pub async fn records_from(&self, from: usize) -> Vec<NormalizedRecord> {
        let state = self.state.lock().await;
        state.records.iter().skip(from).cloned().collect()
    }
}
