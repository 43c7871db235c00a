//! The state threaded through the task graph
//!
//! One context per run. Each node takes it by value, fills in its stage and
//! hands it on.

use crate::serializer::ArtifactRecord;
use pagecraft_certify::ValidationReport;
use pagecraft_content::{ArtifactDraft, ArtifactKind, QuestionBank};
use pagecraft_product::{NormalizedProduct, RawProductInput, SyntheticCounterpart};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Per-run pipeline state
#[derive(Debug, Clone, Default)]
pub struct PipelineContext {
    pub(crate) raw: Option<RawProductInput>,
    pub(crate) product: Option<NormalizedProduct>,
    pub(crate) questions: Option<QuestionBank>,
    pub(crate) counterpart: Option<SyntheticCounterpart>,
    pub(crate) drafts: BTreeMap<ArtifactKind, ArtifactDraft>,
    pub(crate) artifacts: Vec<ArtifactRecord>,
    pub(crate) schema_paths: BTreeMap<ArtifactKind, PathBuf>,
    pub(crate) report: Option<ValidationReport>,
    pub(crate) trail: Vec<String>,
}

impl PipelineContext {
    /// Fresh context for one run
    #[must_use]
    pub fn new(raw: RawProductInput, schema_paths: BTreeMap<ArtifactKind, PathBuf>) -> Self {
        Self {
            raw: Some(raw),
            schema_paths,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn raw(&self) -> Option<&RawProductInput> {
        self.raw.as_ref()
    }

    #[must_use]
    pub fn product(&self) -> Option<&NormalizedProduct> {
        self.product.as_ref()
    }

    #[must_use]
    pub fn questions(&self) -> Option<&QuestionBank> {
        self.questions.as_ref()
    }

    #[must_use]
    pub fn counterpart(&self) -> Option<&SyntheticCounterpart> {
        self.counterpart.as_ref()
    }

    #[must_use]
    pub fn draft(&self, kind: ArtifactKind) -> Option<&ArtifactDraft> {
        self.drafts.get(&kind)
    }

    /// Written artifacts, in write order
    #[must_use]
    pub fn artifacts(&self) -> &[ArtifactRecord] {
        &self.artifacts
    }

    #[must_use]
    pub fn schema_paths(&self) -> &BTreeMap<ArtifactKind, PathBuf> {
        &self.schema_paths
    }

    #[must_use]
    pub fn report(&self) -> Option<&ValidationReport> {
        self.report.as_ref()
    }

    /// Ids of the nodes that have run, in order
    #[must_use]
    pub fn trail(&self) -> &[String] {
        &self.trail
    }

    /// Which stages have populated the context
    #[must_use]
    pub fn summary(&self) -> ContextSummary {
        ContextSummary {
            has_raw: self.raw.is_some(),
            has_product: self.product.is_some(),
            has_questions: self.questions.is_some(),
            has_product_b: self.counterpart.is_some(),
            draft_keys: self.drafts.keys().map(|k| k.as_str().to_string()).collect(),
            artifacts_written: self.artifacts.len(),
            validated: self.report.as_ref().is_some_and(|r| r.passed),
        }
    }
}

/// Snapshot of pipeline progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextSummary {
    pub has_raw: bool,
    pub has_product: bool,
    pub has_questions: bool,
    pub has_product_b: bool,
    pub draft_keys: Vec<String>,
    pub artifacts_written: usize,
    pub validated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_context_summary() {
        let summary = PipelineContext::default().summary();
        assert!(!summary.has_raw);
        assert!(!summary.has_product);
        assert!(summary.draft_keys.is_empty());
        assert!(!summary.validated);
    }
}
