// src/listing/context.rs

use crate::api::{ApiError, ListingSource, PageQuery};
use crate::domain::{PropertyPage, PropertyType};
use crate::listing::fetch::PropertyFetch;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::info;

/// What happens to the page cursor when the type filter changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterPagePolicy {
    /// Stay on the current page under the new filter. The service
    /// normalizes a page that is out of range for the filtered set.
    #[default]
    KeepPage,
    ResetToFirst,
}

/// Page number and type filter driving the next request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCursor {
    pub page: u32,
    pub filter: Option<PropertyType>,
}

impl Default for ListCursor {
    fn default() -> Self {
        Self {
            page: 1,
            filter: None,
        }
    }
}

impl ListCursor {
    /// Unconditional; callers check the envelope's `next` first.
    pub fn next_page(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    pub fn prev_page(self) -> Self {
        Self {
            page: self.page.saturating_sub(1).max(1),
            ..self
        }
    }

    pub fn with_filter(self, filter: Option<PropertyType>, policy: FilterPagePolicy) -> Self {
        let page = match policy {
            FilterPagePolicy::KeepPage => self.page,
            FilterPagePolicy::ResetToFirst if filter != self.filter => 1,
            FilterPagePolicy::ResetToFirst => self.page,
        };
        Self { page, filter }
    }

    pub fn query(&self) -> PageQuery {
        PageQuery::new(self.page, self.filter)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    pub properties: Option<PropertyPage>,
    pub loading: bool,
    pub error: Option<ApiError>,
    pub cursor: ListCursor,
}

/// Pagination cursor and active filter for the list view, plus the fetch
/// that follows them. Owned by `AppState`.
pub struct PropertyListContext {
    source: Arc<dyn ListingSource>,
    cursor: Mutex<ListCursor>,
    fetch: PropertyFetch,
    policy: FilterPagePolicy,
}

impl PropertyListContext {
    pub fn new(source: Arc<dyn ListingSource>, policy: FilterPagePolicy) -> Self {
        Self {
            source,
            cursor: Mutex::new(ListCursor::default()),
            fetch: PropertyFetch::new(),
            policy,
        }
    }

    fn cursor(&self) -> MutexGuard<'_, ListCursor> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Initial request for the starting cursor.
    pub fn load(&self) {
        let ticket = {
            let cursor = self.cursor();
            self.fetch.begin(cursor.query())
        };
        self.fetch.run(self.source.as_ref(), ticket);
    }

    /// Applies `step` to the cursor and fetches if it changed.
    fn transition(&self, step: impl FnOnce(ListCursor) -> ListCursor) {
        let ticket = {
            let mut cursor = self.cursor();
            let next = step(*cursor);
            if next == *cursor {
                return;
            }
            info!(page = next.page, filter = ?next.filter, "list cursor moved");
            *cursor = next;
            // issued under the cursor lock so ticket order follows cursor order
            self.fetch.begin(next.query())
        };
        self.fetch.run(self.source.as_ref(), ticket);
    }

    pub fn next_page(&self) {
        self.transition(ListCursor::next_page);
    }

    pub fn prev_page(&self) {
        self.transition(ListCursor::prev_page);
    }

    pub fn set_filter(&self, filter: Option<PropertyType>) {
        let policy = self.policy;
        self.transition(|c| c.with_filter(filter, policy));
    }

    pub fn refetch(&self) {
        self.fetch.refetch(self.source.as_ref());
    }

    #[cfg(test)]
    pub(crate) fn fetch_state(&self) -> &PropertyFetch {
        &self.fetch
    }

    pub fn snapshot(&self) -> ListSnapshot {
        let cursor = *self.cursor();
        let fetched = self.fetch.snapshot();
        ListSnapshot {
            properties: fetched.data,
            loading: fetched.loading,
            error: fetched.error,
            cursor,
        }
    }
}
