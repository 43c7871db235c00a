//! End-of-run certification
//!
//! Structural pass over every written artifact that has a schema, then the
//! fact pass over every written artifact. The first failure aborts.

use crate::error::CertifyError;
use crate::fact_guard::FactGuard;
use crate::schema::{read_json, SchemaValidator};
use pagecraft_content::ArtifactKind;
use pagecraft_product::NormalizedProduct;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Outcome of a successful certification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub passed: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn passed() -> Self {
        Self {
            passed: true,
            errors: Vec::new(),
        }
    }
}

/// Certify written artifacts
///
/// `artifacts` pairs each kind with the file it was written to; `schemas`
/// maps kinds to schema documents. An artifact without a schema skips the
/// structural pass but is still fact-checked.
///
/// # Errors
/// The first [`CertifyError`] raised by either pass.
pub fn certify_outputs(
    product: &NormalizedProduct,
    artifacts: &[(ArtifactKind, PathBuf)],
    schemas: &BTreeMap<ArtifactKind, PathBuf>,
) -> Result<ValidationReport, CertifyError> {
    for (kind, path) in artifacts {
        match schemas.get(kind) {
            Some(schema_path) => SchemaValidator::load(schema_path)?.validate_file(path)?,
            None => tracing::warn!(kind = %kind, "no schema declared; structural check skipped"),
        }
    }

    let guard = FactGuard::new(product);
    for (kind, path) in artifacts {
        let artifact = read_json(path)?;
        guard.check(*kind, &artifact)?;
        tracing::info!(kind = %kind, file = %path.display(), "fact check passed");
    }

    tracing::info!(artifacts = artifacts.len(), "certification passed");
    Ok(ValidationReport::passed())
}
