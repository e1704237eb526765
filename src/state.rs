use crate::api::ListingSource;
use crate::listing::{FilterPagePolicy, PropertyListContext};
use std::sync::Arc;

/// Everything a request handler needs. Built once in `main`.
pub struct AppState {
    pub source: Arc<dyn ListingSource>,
    pub list: PropertyListContext,
}

impl AppState {
    pub fn new(source: Arc<dyn ListingSource>, policy: FilterPagePolicy) -> Self {
        Self {
            list: PropertyListContext::new(source.clone(), policy),
            source,
        }
    }
}
