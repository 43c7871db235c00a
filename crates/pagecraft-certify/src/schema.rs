//! Structural validation against Draft 2020-12 JSON Schema documents

use crate::error::CertifyError;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Read and parse a JSON document
pub(crate) fn read_json(path: &Path) -> Result<Value, CertifyError> {
    let text = std::fs::read_to_string(path).map_err(|e| CertifyError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| CertifyError::json(path, e))
}

/// A compiled schema document
pub struct SchemaValidator {
    path: PathBuf,
    compiled: JSONSchema,
}

impl SchemaValidator {
    /// Load and compile a schema file
    ///
    /// The document is checked against the Draft 2020-12 meta-schema while
    /// compiling.
    ///
    /// # Errors
    /// - [`CertifyError::Io`] / [`CertifyError::Json`] if the file is unreadable
    /// - [`CertifyError::InvalidSchema`] if the document is not a valid schema
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CertifyError> {
        let path = path.as_ref();
        let schema = read_json(path)?;
        Self::from_value(path, &schema)
    }

    /// Compile an in-memory schema; `path` is only used in messages
    ///
    /// # Errors
    /// [`CertifyError::InvalidSchema`] if the document is not a valid schema.
    pub fn from_value(path: impl Into<PathBuf>, schema: &Value) -> Result<Self, CertifyError> {
        let path = path.into();
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft202012)
            .compile(schema)
            .map_err(|e| CertifyError::InvalidSchema {
                path: path.clone(),
                message: e.to_string(),
            })?;
        tracing::debug!(schema = %path.display(), "compiled schema");
        Ok(Self { path, compiled })
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate an in-memory instance; `file` names it in errors
    ///
    /// # Errors
    /// [`CertifyError::SchemaValidation`] for the first violation found.
    pub fn validate_value(&self, file: &Path, instance: &Value) -> Result<(), CertifyError> {
        let first = match self.compiled.validate(instance) {
            Ok(()) => None,
            Err(mut errors) => errors
                .next()
                .map(|e| (e.instance_path.to_string(), e.to_string())),
        };
        match first {
            None => Ok(()),
            Some((path, message)) => Err(CertifyError::SchemaValidation {
                file: file.to_path_buf(),
                path,
                message,
            }),
        }
    }

    /// Re-read an artifact from storage and validate it
    ///
    /// # Errors
    /// Read/parse errors, or [`CertifyError::SchemaValidation`].
    pub fn validate_file(&self, instance_path: impl AsRef<Path>) -> Result<(), CertifyError> {
        let instance_path = instance_path.as_ref();
        let instance = read_json(instance_path)?;
        self.validate_value(instance_path, &instance)?;
        tracing::info!(
            file = %instance_path.display(),
            schema = %self.path.display(),
            "schema validation passed"
        );
        Ok(())
    }
}

impl fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
