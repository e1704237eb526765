use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Listing service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response from listing service: {0}")]
    Decode(String),

    #[error("Property {0} not found")]
    NotFound(String),

    /// A create request the service refused, reduced to one readable message.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Invalid listing service URL: {0}")]
    InvalidUrl(String),
}

/// Reduces an error body from the listing service to a single message.
pub fn error_message_from_body(body: &str) -> String {
    const FALLBACK: &str = "Failed to create property";

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return FALLBACK.to_string();
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()).map(str::to_string))
            .unwrap_or_else(|| trimmed.to_string()),
        _ => trimmed.to_string(),
    }
}
