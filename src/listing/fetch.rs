// src/listing/fetch.rs

use crate::api::{ApiError, ListingSource, PageQuery};
use crate::domain::PropertyPage;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// What the list view sees of the fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchSnapshot {
    pub data: Option<PropertyPage>,
    pub error: Option<ApiError>,
    pub loading: bool,
}

#[derive(Default)]
struct FetchState {
    seq: u64,
    last_query: Option<PageQuery>,
    snapshot: FetchSnapshot,
}

/// Handed out when a request starts. Completing with a ticket that is no
/// longer the newest one leaves the state alone.
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
    pub query: PageQuery,
}

/// Loading/error/data state for one page request at a time.
#[derive(Default)]
pub struct PropertyFetch {
    state: Mutex<FetchState>,
}

impl PropertyFetch {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FetchState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn begin(&self, query: PageQuery) -> FetchTicket {
        let mut state = self.lock();
        state.seq += 1;
        state.last_query = Some(query);
        state.snapshot.loading = true;
        state.snapshot.error = None;

        FetchTicket {
            seq: state.seq,
            query,
        }
    }

    /// Applies a response. Returns false if a newer request has started
    /// since `ticket` was issued, in which case the response is dropped.
    pub fn finish(&self, ticket: FetchTicket, result: Result<PropertyPage, ApiError>) -> bool {
        let mut state = self.lock();
        if ticket.seq != state.seq {
            debug!(
                stale = ticket.seq,
                current = state.seq,
                page = ticket.query.page,
                "discarding stale listing response"
            );
            return false;
        }

        match result {
            Ok(page) => state.snapshot.data = Some(page),
            Err(err) => {
                warn!(page = ticket.query.page, error = %err, "listing fetch failed");
                state.snapshot.error = Some(err);
            }
        }
        state.snapshot.loading = false;
        true
    }

    /// Runs `ticket` against `source`. The lock is not held during the request.
    pub fn run(&self, source: &dyn ListingSource, ticket: FetchTicket) -> bool {
        let result = source.fetch_page(&ticket.query);
        self.finish(ticket, result)
    }

    pub fn fetch(&self, source: &dyn ListingSource, query: PageQuery) -> bool {
        let ticket = self.begin(query);
        self.run(source, ticket)
    }

    /// Repeats the last request, or page 1 unfiltered if there was none.
    pub fn refetch(&self, source: &dyn ListingSource) -> bool {
        let query = self.last_query().unwrap_or_default();
        self.fetch(source, query)
    }

    pub fn last_query(&self) -> Option<PageQuery> {
        self.lock().last_query
    }

    pub fn snapshot(&self) -> FetchSnapshot {
        self.lock().snapshot.clone()
    }
}
