//! Error types for the pipeline
//!
//! [`PipelineError`] is what a pipeline node returns. It wraps the error of
//! every stage crate so a failed run reports the original cause.

use pagecraft_certify::CertifyError;
use pagecraft_content::AssemblyError;
use pagecraft_product::ProductError;
use std::path::PathBuf;

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`PipelineConfig`](crate::PipelineConfig)
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `faq_limit` is above the number of FAQ entries a page carries
    #[error("invalid config: faq_limit {value} exceeds the maximum of {max}")]
    FaqLimit { value: usize, max: usize },
}

/// Pipeline node errors
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Input record is malformed
    #[error(transparent)]
    Product(#[from] ProductError),

    /// A page could not be assembled
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    /// Certification failed
    #[error(transparent)]
    Certify(#[from] CertifyError),

    /// A node ran before the stage it reads from
    #[error("node '{node}' requires {missing}, which has not been produced")]
    Prerequisite {
        node: &'static str,
        missing: &'static str,
    },

    /// An artifact could not be encoded
    #[error("failed to encode artifact: {0}")]
    Encode(#[from] serde_json::Error),

    /// An artifact could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PipelineError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
