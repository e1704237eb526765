use maud::{html, Markup};

pub mod card;
pub mod error;
pub mod states;

pub use card::property_card;
pub use error::error_page;
pub use states::{error_state, loading_state};

pub fn form_label(for_id: &str, text: &str) -> Markup {
    html! {
        label for=(for_id) class="form-label" { (text) }
    }
}
