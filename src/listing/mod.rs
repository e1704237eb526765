pub mod context;
pub mod fetch;

pub use context::{FilterPagePolicy, PropertyListContext};
