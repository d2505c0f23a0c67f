//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a, T> {
    /// The rendered items
    pub data: &'a [T],

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Number of items in `data`
    pub count: usize,

    /// Timestamp of the render
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<'a, T> JsonOutput<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            meta: Metadata {
                count: data.len(),
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format items as pretty-printed JSON
pub fn format_json<T: Serialize>(data: &[T]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data))
}
