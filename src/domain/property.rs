// src/domain/property.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of listings the service returns per page.
pub const PAGE_SIZE: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Condo,
    Apartment,
    House,
}

impl PropertyType {
    pub const ALL: [PropertyType; 3] = [
        PropertyType::Condo,
        PropertyType::Apartment,
        PropertyType::House,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Condo => "condo",
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Condo => "Condo",
            PropertyType::Apartment => "Apartment",
            PropertyType::House => "House",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "condo" => Ok(PropertyType::Condo),
            "apartment" => Ok(PropertyType::Apartment),
            "house" => Ok(PropertyType::House),
            other => Err(format!("unknown property type: {other}")),
        }
    }
}

/// Value used by the filter control for "no filter".
pub const ALL_TYPES: &str = "all";

/// Parses a filter control value. `"all"` clears the filter.
pub fn parse_type_filter(value: &str) -> Result<Option<PropertyType>, String> {
    if value == ALL_TYPES {
        return Ok(None);
    }
    value.parse().map(Some)
}

/// A listing as returned by the listing service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Service-side numeric id. Records created through the form don't carry one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i64>,
    pub property_name: String,
    pub property_type: PropertyType,
    pub address: String,
    pub city: String,
    #[serde(deserialize_with = "string_or_number")]
    pub postal_code: String,
    #[serde(deserialize_with = "non_negative_price", serialize_with = "serialize_price")]
    pub price: f64,
    pub description: String,
    pub listing_date: String,
}

/// One page of listings plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyPage {
    pub first: u32,
    #[serde(default)]
    pub prev: Option<u32>,
    #[serde(default)]
    pub next: Option<u32>,
    pub last: u32,
    pub pages: u32,
    pub items: u32,
    pub data: Vec<Property>,
}

impl PropertyPage {
    /// Current page as shown to the user, derived from the neighbours
    /// rather than reported directly: `next - 1`, else `prev + 1`.
    /// A single-page result has neither, so it falls back to `first`.
    pub fn page_label(&self) -> u32 {
        match (self.next, self.prev) {
            (Some(next), _) => next.saturating_sub(1),
            (None, Some(prev)) => prev + 1,
            (None, None) => self.first,
        }
    }
}

/// Body POSTed to create a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProperty {
    pub property_name: String,
    pub property_type: PropertyType,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    #[serde(serialize_with = "serialize_price")]
    pub price: f64,
    pub description: String,
    pub listing_date: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    })
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = f64::deserialize(deserializer)?;
    if !price.is_finite() || price < 0.0 {
        return Err(serde::de::Error::custom(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(price)
}

// Whole prices go over the wire as integers, the way the browser client sent them.
fn serialize_price<S>(price: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if price.fract() == 0.0 && price.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*price as i64)
    } else {
        serializer.serialize_f64(*price)
    }
}
