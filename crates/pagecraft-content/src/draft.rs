//! Artifact drafts
//!
//! A draft is the loosely-shaped JSON object an assembler produces. The
//! serializer later narrows it to the exact persisted shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The three generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    ProductPage,
    Faq,
    Comparison,
}

impl ArtifactKind {
    /// Every kind, in write order
    pub const ALL: [Self; 3] = [Self::Faq, Self::ProductPage, Self::Comparison];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ProductPage => "product_page",
            Self::Faq => "faq",
            Self::Comparison => "comparison",
        }
    }

    /// Output file name inside the output directory
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::ProductPage => "product_page.json",
            Self::Faq => "faq.json",
            Self::Comparison => "comparison_page.json",
        }
    }

    /// Schema document name inside the schema directory
    #[must_use]
    pub const fn schema_file_name(self) -> &'static str {
        match self {
            Self::ProductPage => "product_page.schema.json",
            Self::Faq => "faq.schema.json",
            Self::Comparison => "comparison_page.schema.json",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Assembled, not yet persisted, artifact
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactDraft {
    kind: ArtifactKind,
    fields: Map<String, Value>,
}

impl ArtifactDraft {
    #[must_use]
    pub fn new(kind: ArtifactKind) -> Self {
        Self {
            kind,
            fields: Map::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Top-level field by name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Nested field by dot path (`"hero.title"`)
    #[must_use]
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut parts = path.split('.');
        let mut current = self.fields.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// Set a top-level field, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Set a nested field by dot path, creating intermediate objects
    ///
    /// A non-object value sitting on the path is replaced by an object.
    pub fn set_path(&mut self, path: &str, value: Value) {
        let parts: Vec<&str> = path.split('.').collect();
        let Some((last, parents)) = parts.split_last() else {
            return;
        };

        let mut current = &mut self.fields;
        for part in parents {
            let slot = current
                .entry((*part).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Value::Object(next) = slot else {
                return;
            };
            current = next;
        }
        current.insert((*last).to_string(), value);
    }

    /// The draft as one JSON object
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}
