// src/domain/form.rs

use crate::domain::property::{NewProperty, PropertyType};

/// Raw values of the create-property form, kept as entered so the form
/// can be shown again after a failed submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyForm {
    pub property_name: String,
    pub property_type: PropertyType,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub price: String,
    pub description: String,
    pub listing_date: String,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            property_name: String::new(),
            property_type: PropertyType::Condo,
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
            price: String::new(),
            description: String::new(),
            listing_date: String::new(),
        }
    }
}

impl PropertyForm {
    /// Builds the form from decoded `application/x-www-form-urlencoded` pairs.
    /// Unknown keys are ignored; an unknown type is a bad request.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = PropertyForm::default();

        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "property_name" => form.property_name = value,
                "property_type" => form.property_type = value.parse()?,
                "address" => form.address = value,
                "city" => form.city = value,
                "postal_code" => form.postal_code = value,
                "price" => form.price = value,
                "description" => form.description = value,
                "listing_date" => form.listing_date = value,
                _ => {}
            }
        }

        Ok(form)
    }

    pub fn to_new_property(&self) -> Result<NewProperty, String> {
        let price = parse_price(&self.price)?;

        Ok(NewProperty {
            property_name: self.property_name.clone(),
            property_type: self.property_type,
            address: self.address.clone(),
            city: self.city.clone(),
            postal_code: self.postal_code.clone(),
            price,
            description: self.description.clone(),
            listing_date: self.listing_date.clone(),
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    // an empty number input converts to zero, like the browser does
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(price) if price.is_finite() => Ok(price),
        _ => Err(format!("Price must be a number, got \"{raw}\"")),
    }
}
