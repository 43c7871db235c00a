//! Error types for certification

use std::path::PathBuf;

/// Certification errors
///
/// Every variant is fatal to the run.
#[derive(Debug, thiserror::Error)]
pub enum CertifyError {
    /// A schema or artifact file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A schema or artifact file is not JSON
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The schema document itself is defective
    #[error("invalid schema {}: {message}", .path.display())]
    InvalidSchema { path: PathBuf, message: String },

    /// An artifact does not conform to its schema
    #[error("{}: schema violation at '{path}': {message}", .file.display())]
    SchemaValidation {
        file: PathBuf,
        path: String,
        message: String,
    },

    /// An artifact states a fact absent from the product record
    #[error("content violation in {context}: {detail}")]
    ContentViolation { context: String, detail: String },
}

impl CertifyError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn content(context: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ContentViolation {
            context: context.into(),
            detail: detail.into(),
        }
    }
}
