//! Pipeline configuration
//!
//! All fields are optional in TOML; missing ones take their defaults.
//! `faq_limit` may not exceed [`DEFAULT_FAQ_LIMIT`].
//!
//! ```toml
//! output_dir = "outputs"
//! schema_dir = "schemas"
//! faq_limit = 5
//! ```

use crate::error::ConfigError;
use pagecraft_content::{ArtifactKind, DEFAULT_FAQ_LIMIT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Where artifacts go, where schemas live, how many FAQs to resolve
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub output_dir: PathBuf,
    pub schema_dir: PathBuf,
    pub faq_limit: usize,
}

impl PipelineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    #[must_use]
    pub fn with_schema_dir(mut self, schema_dir: impl Into<PathBuf>) -> Self {
        self.schema_dir = schema_dir.into();
        self
    }

    /// Capped at [`DEFAULT_FAQ_LIMIT`]
    #[must_use]
    pub fn with_faq_limit(mut self, faq_limit: usize) -> Self {
        self.faq_limit = faq_limit.min(DEFAULT_FAQ_LIMIT);
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] for invalid TOML or unknown keys,
    /// [`ConfigError::FaqLimit`] for a `faq_limit` above [`DEFAULT_FAQ_LIMIT`].
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        if config.faq_limit > DEFAULT_FAQ_LIMIT {
            return Err(ConfigError::FaqLimit {
                value: config.faq_limit,
                max: DEFAULT_FAQ_LIMIT,
            });
        }
        Ok(config)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// [`ConfigError::Io`] if unreadable, otherwise as
    /// [`PipelineConfig::from_toml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Schema document path for every artifact kind
    #[must_use]
    pub fn schema_paths(&self) -> BTreeMap<ArtifactKind, PathBuf> {
        ArtifactKind::ALL
            .iter()
            .map(|kind| (*kind, self.schema_dir.join(kind.schema_file_name())))
            .collect()
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("outputs"),
            schema_dir: PathBuf::from("schemas"),
            faq_limit: DEFAULT_FAQ_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("outputs"));
        assert_eq!(config.schema_dir, PathBuf::from("schemas"));
        assert_eq!(config.faq_limit, 5);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = PipelineConfig::from_toml_str("output_dir = \"site/data\"\n").unwrap();
        assert_eq!(config, PipelineConfig::new().with_output_dir("site/data"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            PipelineConfig::from_toml_str("faq_count = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn faq_limit_above_maximum_is_rejected() {
        let err = PipelineConfig::from_toml_str("faq_limit = 12").unwrap_err();
        assert!(matches!(err, ConfigError::FaqLimit { value: 12, max: 5 }));
        assert_eq!(
            err.to_string(),
            "invalid config: faq_limit 12 exceeds the maximum of 5"
        );

        let config = PipelineConfig::from_toml_str("faq_limit = 5").unwrap();
        assert_eq!(config.faq_limit, 5);
    }

    #[test]
    fn builder_caps_faq_limit() {
        assert_eq!(PipelineConfig::new().with_faq_limit(99).faq_limit, 5);
        assert_eq!(PipelineConfig::new().with_faq_limit(0).faq_limit, 0);
    }

    #[test]
    fn schema_paths_follow_schema_dir() {
        let paths = PipelineConfig::new().with_schema_dir("/s").schema_paths();
        assert_eq!(paths.len(), 3);
        assert_eq!(
            paths[&ArtifactKind::Faq],
            PathBuf::from("/s/faq.schema.json")
        );
    }
}
