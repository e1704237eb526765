use crate::domain::logic::{format_listing_date, format_price};
use crate::domain::Property;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Field set shared by the detail route and the quick-view dialog.
pub fn property_fields(property: &Property) -> Markup {
    html! {
        div class="property-detail" {
            h1 { (property.property_name) }
            p class="address" {
                (property.address) ", " (property.city) " " (property.postal_code)
            }
            div class="facts" {
                span class="type-badge" { (property.property_type.as_str().to_uppercase()) }
                span class="price" { (format_price(property.price)) }
                span class="listed" { "Listed on: " (format_listing_date(&property.listing_date)) }
            }
            hr;
            div {
                h2 { "Description" }
                p class="description" { (property.description) }
            }
        }
    }
}

pub fn property_detail_page(property: &Property) -> Markup {
    desktop_layout(&property.property_name, property_fields(property))
}
