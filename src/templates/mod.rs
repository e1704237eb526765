pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use crate::responses::html_error_response;
pub use layouts::desktop::{desktop_layout, desktop_layout_with_head};
