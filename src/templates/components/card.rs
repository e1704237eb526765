use crate::domain::logic::format_price;
use crate::domain::Property;
use maud::{html, Markup};

pub fn property_card(property: &Property, search: &str) -> Markup {
    html! {
        div class="property-card" data-id=(property.id) {
            div {
                h2 { (property.property_name) ", " (property.city) }
                p { (property.address) }
                div class="type-badge" { (property.property_type.as_str().to_uppercase()) }
            }
            div class="card-footer" {
                div class="price" { (format_price(property.price)) }
                a class="btn" href=(quick_view_href(&property.id, search)) { "Quick view" }
                a class="btn" href=(detail_href(&property.id)) { "See Details" }
            }
        }
    }
}

fn detail_href(id: &str) -> String {
    format!("/properties/{}", urlencoding::encode(id))
}

fn quick_view_href(id: &str, search: &str) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    if !search.is_empty() {
        query.append_pair("q", search);
    }
    query.append_pair("details", "open");
    query.append_pair("selected", id);
    format!("/?{}", query.finish())
}
