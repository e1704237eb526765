mod api_error;
mod listing_client;

pub use api_error::ApiError;
pub use listing_client::{HttpListingSource, ListingSource, PageQuery};
