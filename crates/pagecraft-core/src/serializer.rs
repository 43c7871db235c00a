//! Schema-strict serialization
//!
//! A draft is narrowed to exactly the top-level keys its page kind
//! recognises, in schema order, with fixed defaults for anything missing.
//! Files are written through a sibling temp file and renamed into place, so
//! each artifact is either fully written or untouched.

use crate::error::PipelineError;
use pagecraft_content::{ArtifactDraft, ArtifactKind, FaqPageAssembler, ProductPageAssembler};
use pagecraft_product::{COUNTERPART_NAME, CURRENCY_CODE};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

fn default_price() -> Value {
    json!({ "currency": CURRENCY_CODE, "amount": 0 })
}

/// Recognised top-level keys and their defaults, in schema order
fn layout(kind: ArtifactKind) -> Vec<(&'static str, Value)> {
    match kind {
        ArtifactKind::ProductPage => vec![
            ("meta", json!({ "generated_by": ProductPageAssembler::GENERATED_BY })),
            ("hero", json!({ "title": "" })),
            ("details", json!({ "ingredients": [], "benefits": [] })),
            ("usage", json!("")),
            ("safety", json!("")),
            ("pricing", default_price()),
        ],
        ArtifactKind::Faq => vec![
            ("title", json!("")),
            ("ingredients", json!([])),
            ("benefits", json!([])),
            ("usage", json!("")),
            ("safety", json!("")),
            ("price", default_price()),
            ("question_bank", json!([])),
            ("faqs", json!([])),
            ("meta", json!({ "generated_by": FaqPageAssembler::GENERATED_BY })),
        ],
        ArtifactKind::Comparison => vec![
            (
                "meta",
                json!({ "product_b_fictional": true, "product_b_name": COUNTERPART_NAME }),
            ),
            ("comparison", json!([])),
            ("product_a", json!({ "name": "" })),
            (
                "product_b",
                json!({
                    "name": COUNTERPART_NAME,
                    "key_ingredients": [],
                    "benefits": [],
                    "price": default_price(),
                }),
            ),
        ],
    }
}

/// The exact JSON value persisted for one artifact
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedArtifact {
    kind: ArtifactKind,
    value: Value,
}

impl PersistedArtifact {
    /// Narrow a draft to its persisted shape
    ///
    /// Unknown top-level keys are dropped; missing ones take their defaults.
    /// Values are carried over as-is, so a mistyped value is left for the
    /// structural validator to report.
    #[must_use]
    pub fn from_draft(draft: &ArtifactDraft) -> Self {
        let mut out = Map::new();
        for (key, default) in layout(draft.kind()) {
            let value = draft.get(key).cloned().unwrap_or(default);
            out.insert(key.to_string(), value);
        }

        let dropped = draft
            .fields()
            .keys()
            .filter(|k| !out.contains_key(k.as_str()))
            .count();
        if dropped > 0 {
            tracing::warn!(kind = %draft.kind(), dropped, "dropped unrecognised draft keys");
        }

        Self {
            kind: draft.kind(),
            value: Value::Object(out),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// UTF-8 JSON, two-space indentation, non-ASCII kept literal
    ///
    /// # Errors
    /// [`PipelineError::Encode`] if the value cannot be encoded.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, PipelineError> {
        Ok(serde_json::to_vec_pretty(&self.value)?)
    }
}

/// A written artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRecord {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    /// Lowercase hex SHA-256 of the file contents
    pub sha256: String,
    pub bytes: usize,
}

/// Write an artifact into `dir`, creating the directory if needed
///
/// # Errors
/// [`PipelineError::Io`] on any filesystem failure; a partially written
/// temp file is removed.
pub fn write_artifact(artifact: &PersistedArtifact, dir: &Path) -> Result<ArtifactRecord, PipelineError> {
    std::fs::create_dir_all(dir).map_err(|e| PipelineError::io(dir, e))?;

    let bytes = artifact.to_json_bytes()?;
    let path = dir.join(artifact.kind.file_name());
    let tmp = dir.join(format!(".{}.tmp", artifact.kind.file_name()));

    if let Err(e) = std::fs::write(&tmp, &bytes) {
        let _ = std::fs::remove_file(&tmp);
        return Err(PipelineError::io(&tmp, e));
    }
    if let Err(e) = std::fs::rename(&tmp, &path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(PipelineError::io(&path, e));
    }

    let record = ArtifactRecord {
        kind: artifact.kind,
        sha256: hex::encode(Sha256::digest(&bytes)),
        bytes: bytes.len(),
        path,
    };
    tracing::info!(
        kind = %record.kind,
        path = %record.path.display(),
        sha256 = %record.sha256,
        bytes = record.bytes,
        "wrote artifact"
    );
    Ok(record)
}
