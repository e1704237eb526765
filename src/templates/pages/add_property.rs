use crate::domain::{PropertyForm, PropertyType};
use crate::templates::components::form_label;
use crate::templates::desktop_layout;
use maud::{html, Markup};

#[derive(Default)]
pub struct AddPropertyVm {
    pub form: PropertyForm,
    /// Message from a failed submission, shown under the form.
    pub error: Option<String>,
}

pub fn add_property_page(vm: &AddPropertyVm) -> Markup {
    let form = &vm.form;

    desktop_layout(
        "Create New Property",
        html! {
            form method="post" action="/properties/add-property" class="property-form" {
                h2 { "Create New Property" }

                div {
                    (form_label("property_name", "Property Name*"))
                    input type="text" name="property_name" id="property_name" required
                        placeholder="eg. Lakeview Apartment" value=(form.property_name);
                }

                div {
                    (form_label("address", "Address*"))
                    input type="text" name="address" id="address" required
                        placeholder="eg. 1234 Elm Street" value=(form.address);
                }

                div class="row" {
                    div {
                        (form_label("city", "City*"))
                        input type="text" name="city" id="city" required value=(form.city);
                    }
                    div {
                        (form_label("postal_code", "Postal Code*"))
                        input type="number" name="postal_code" id="postal_code" required
                            value=(form.postal_code);
                    }
                }

                div class="row" {
                    div {
                        (form_label("price", "Price (₹)*"))
                        input type="number" name="price" id="price" required
                            placeholder="eg. 12000000" value=(form.price);
                    }
                    div {
                        (form_label("listing_date", "Listing Date*"))
                        input type="date" name="listing_date" id="listing_date" required
                            value=(form.listing_date);
                    }
                }

                div {
                    (form_label("property_type", "Property Type*"))
                    select name="property_type" id="property_type" required {
                        @for kind in PropertyType::ALL {
                            option value=(kind.as_str()) selected[form.property_type == kind] {
                                (kind.label())
                            }
                        }
                    }
                }

                div {
                    (form_label("description", "Description*"))
                    input type="text" name="description" id="description" required
                        placeholder="Short summary about the property" value=(form.description);
                }

                @if let Some(message) = &vm.error {
                    p class="form-error" role="alert" { (message) }
                }

                button class="btn" type="submit" { "Create Property" }
            }
        },
    )
}
