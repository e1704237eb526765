use maud::{html, Markup};

pub fn loading_state(message: &str) -> Markup {
    html! {
        div class="state loading-state" role="status" { (message) }
    }
}

pub fn error_state(message: &str) -> Markup {
    html! {
        div class="state error-state" role="alert" { (message) }
    }
}
