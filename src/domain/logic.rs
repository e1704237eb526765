// src/domain/logic.rs

use crate::domain::property::Property;
use chrono::{DateTime, NaiveDate};

/// Narrows the already-fetched page to listings whose name or city contains
/// `query`, ignoring case. Only the current page is searched.
pub fn search_properties<'a>(items: &'a [Property], query: &str) -> Vec<&'a Property> {
    if query.is_empty() {
        return items.iter().collect();
    }

    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|p| {
            p.property_name.to_lowercase().contains(&needle)
                || p.city.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Formats a price with en-US digit grouping and the rupee glyph,
/// keeping at most three fraction digits.
pub fn format_price(price: f64) -> String {
    let rounded = (price * 1000.0).round() / 1000.0;
    let whole = rounded.trunc() as u64;
    let fraction = ((rounded - rounded.trunc()) * 1000.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if fraction > 0 {
        let frac = format!("{fraction:03}");
        grouped.push('.');
        grouped.push_str(frac.trim_end_matches('0'));
    }

    format!("₹ {grouped}")
}

/// Renders a listing date as `M/D/YYYY`. Values that are neither a plain
/// date nor an RFC 3339 timestamp are shown as-is.
pub fn format_listing_date(raw: &str) -> String {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()));

    match date {
        Some(d) => d.format("%-m/%-d/%Y").to_string(),
        None => raw.to_string(),
    }
}
