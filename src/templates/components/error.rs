use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full error page used for routing and upstream failures.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        html! {
            div class="state error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to properties" } }
            }
        },
    )
}
