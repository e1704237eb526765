use crate::domain::property::ALL_TYPES;
use crate::domain::{Property, PropertyPage, PropertyType};
use crate::templates::components::{error_state, loading_state, property_card};
use crate::templates::pages::property_detail::property_fields;
use crate::templates::{desktop_layout, desktop_layout_with_head};
use maud::{html, Markup};

pub const LOADING_MESSAGE: &str = "Wait while we are fetching properties";
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load properties";

pub struct PropertiesVm<'a> {
    pub page: &'a PropertyPage,
    pub filter: Option<PropertyType>,
    pub search: &'a str,
    /// Current page after the search is applied.
    pub visible: Vec<&'a Property>,
    /// Listing shown in the quick-view dialog, if open.
    pub selected: Option<&'a Property>,
}

pub fn properties_page(vm: &PropertiesVm) -> Markup {
    desktop_layout(
        "Properties",
        html! {
            (list_header(vm.filter, vm.search, vm.page.items))

            div class="grid" {
                @for property in &vm.visible {
                    (property_card(property, vm.search))
                }
            }

            (pagination(vm.page))

            @if let Some(selected) = vm.selected {
                dialog open id="property-dialog" {
                    (property_fields(selected))
                    form method="get" action="/" {
                        @if !vm.search.is_empty() {
                            input type="hidden" name="q" value=(vm.search);
                        }
                        button class="btn" type="submit" { "Close" }
                    }
                }
            }
        },
    )
}

pub fn loading_page() -> Markup {
    desktop_layout_with_head(
        "Properties",
        html! { meta http-equiv="refresh" content="1"; },
        loading_state(LOADING_MESSAGE),
    )
}

pub fn load_error_page() -> Markup {
    desktop_layout("Properties", error_state(LOAD_ERROR_MESSAGE))
}

fn list_header(filter: Option<PropertyType>, search: &str, total_items: u32) -> Markup {
    let current = filter.map(|t| t.as_str()).unwrap_or(ALL_TYPES);

    html! {
        div class="list-header" {
            h2 { "All Properties" }
            p class="count" { (total_items) " listings" }

            form method="get" action="/" class="search" {
                label class="sr-only" for="q" { "Search by name or city" }
                input type="search" id="q" name="q" value=(search) placeholder="Search name or city";
                button class="btn" type="submit" { "Search" }
            }

            form method="post" action="/filter" class="filter" {
                label class="sr-only" for="property_type" { "Filter by Type" }
                select id="property_type" name="property_type" {
                    option value=(ALL_TYPES) selected[current == ALL_TYPES] { "All" }
                    @for kind in PropertyType::ALL {
                        option value=(kind.as_str()) selected[current == kind.as_str()] { (kind.label()) }
                    }
                }
                button class="btn" type="submit" { "Apply" }
            }

            a class="btn" href="/properties/add-property" { "Add Property" }
        }
    }
}

fn pagination(page: &PropertyPage) -> Markup {
    html! {
        div class="pagination" {
            form method="post" action="/page/prev" {
                button class="btn" type="submit" aria-disabled=[page.prev.is_none().then_some("true")] {
                    "Previous Page"
                }
            }
            span class="page-label" { "Page " (page.page_label()) " of " (page.last) }
            form method="post" action="/page/next" {
                button class="btn" type="submit" aria-disabled=[page.next.is_none().then_some("true")] {
                    "Next Page"
                }
            }
        }
    }
}
