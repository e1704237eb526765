pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{html_error_response, ResultResp};

// Normal HTML response
pub use html::{html_response, html_response_with_status};
pub use redirect::see_other;
