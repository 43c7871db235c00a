//! Error types for product ingestion

use std::path::PathBuf;

/// Errors raised while reading and normalizing the raw product record
#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    /// Unknown or missing field label, or a field of the wrong type
    #[error("input schema violation: {0}")]
    SchemaViolation(String),

    /// Input text is not JSON at all
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Input file could not be read
    #[error("io error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ProductError {
    /// Create schema violation error
    #[inline]
    pub fn schema_violation(message: impl Into<String>) -> Self {
        Self::SchemaViolation(message.into())
    }
}
