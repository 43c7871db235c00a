//! Run status record
//!
//! Written after every run, successful or not, so an outside caller can tell
//! what happened without parsing logs.

use anyhow::Context;
use chrono::{DateTime, Utc};
use pagecraft_core::{ArtifactRecord, ContextSummary};
use serde::Serialize;
use std::path::Path;
use uuid::Uuid;

/// Outcome of one `pagecraft run`
#[derive(Debug, Clone, Serialize)]
pub struct RunStatus {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: i64,
    pub exit_code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub artifacts: Vec<ArtifactRecord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ContextSummary>,
}

impl RunStatus {
    /// Start a record; finish it with [`RunStatus::succeeded`] or
    /// [`RunStatus::failed`]
    #[must_use]
    pub fn start() -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::new_v4(),
            started_at: now,
            finished_at: now,
            duration_ms: 0,
            exit_code: 0,
            error: None,
            artifacts: Vec::new(),
            summary: None,
        }
    }

    fn finish(mut self, exit_code: i32) -> Self {
        self.finished_at = Utc::now();
        self.duration_ms = (self.finished_at - self.started_at).num_milliseconds();
        self.exit_code = exit_code;
        self
    }

    #[must_use]
    pub fn succeeded(mut self, artifacts: Vec<ArtifactRecord>, summary: ContextSummary) -> Self {
        self.artifacts = artifacts;
        self.summary = Some(summary);
        self.finish(0)
    }

    #[must_use]
    pub fn failed(mut self, error: &anyhow::Error) -> Self {
        self.error = Some(format!("{error:#}"));
        self.finish(1)
    }

    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Write the record as pretty JSON, creating parent directories
    ///
    /// # Errors
    /// Any filesystem or encoding failure.
    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!(path = %path.display(), run_id = %self.run_id, "wrote run status");
        Ok(())
    }
}
