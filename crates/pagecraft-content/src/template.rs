//! Template specs
//!
//! A template maps output field names to block ids plus a rendering hint.
//! Specs are validated when built: an unknown hint never reaches assembly.

use crate::blocks::BlockRegistry;
use crate::draft::ArtifactKind;
use crate::error::TemplateError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

/// How a block value is shaped before it lands in a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderHint {
    Raw,
    Bullet,
    Paragraph,
}

impl RenderHint {
    /// Accepted textual forms
    pub const ALLOWED: [&'static str; 3] = ["raw", "bullet", "paragraph"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Bullet => "bullet",
            Self::Paragraph => "paragraph",
        }
    }

    /// Shape a block value
    ///
    /// - raw: unchanged
    /// - bullet: list of trimmed, non-empty strings; a lone string becomes a
    ///   one-item list
    /// - paragraph: trimmed text with collapsed whitespace; a list is joined
    ///   with `", "`
    ///
    /// Values of any other shape pass through untouched.
    #[must_use]
    pub fn render(self, value: Value) -> Value {
        match self {
            Self::Raw => value,
            Self::Bullet => match value {
                Value::Array(items) => Value::Array(
                    items
                        .into_iter()
                        .filter_map(|item| match item {
                            Value::String(s) => {
                                let s = s.trim();
                                (!s.is_empty()).then(|| Value::String(s.to_string()))
                            }
                            other => Some(other),
                        })
                        .collect(),
                ),
                Value::String(s) if s.trim().is_empty() => Value::Array(Vec::new()),
                Value::String(s) => Value::Array(vec![Value::String(s.trim().to_string())]),
                Value::Null => Value::Array(Vec::new()),
                other => other,
            },
            Self::Paragraph => match value {
                Value::String(s) => Value::String(collapse_whitespace(&s)),
                Value::Array(items) => {
                    let parts: Vec<String> = items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(collapse_whitespace)
                        .filter(|s| !s.is_empty())
                        .collect();
                    Value::String(parts.join(", "))
                }
                Value::Null => Value::String(String::new()),
                other => other,
            },
        }
    }
}

impl FromStr for RenderHint {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::Raw),
            "bullet" => Ok(Self::Bullet),
            "paragraph" => Ok(Self::Paragraph),
            other => Err(TemplateError::UnknownHint {
                field: String::new(),
                hint: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for RenderHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upstream products a template needs before it can be assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TemplateInput {
    Product,
    Counterpart,
    Questions,
}

impl fmt::Display for TemplateInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Product => "the normalized product",
            Self::Counterpart => "the comparison counterpart",
            Self::Questions => "the question bank",
        })
    }
}

/// One output field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    block_id: String,
    hint: RenderHint,
}

impl FieldSpec {
    /// Build a field from a textual hint
    ///
    /// # Errors
    /// [`TemplateError::UnknownHint`] if `hint` is not raw, bullet or
    /// paragraph.
    pub fn new(
        name: impl Into<String>,
        block_id: impl Into<String>,
        hint: &str,
    ) -> Result<Self, TemplateError> {
        let name = name.into();
        let hint = hint.parse::<RenderHint>().map_err(|_| TemplateError::UnknownHint {
            field: name.clone(),
            hint: hint.to_string(),
        })?;
        Ok(Self::with_hint(name, block_id, hint))
    }

    #[must_use]
    pub fn with_hint(name: impl Into<String>, block_id: impl Into<String>, hint: RenderHint) -> Self {
        Self {
            name: name.into(),
            block_id: block_id.into(),
            hint,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn block_id(&self) -> &str {
        &self.block_id
    }

    #[inline]
    #[must_use]
    pub fn hint(&self) -> RenderHint {
        self.hint
    }
}

/// Declarative description of one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    template_id: String,
    output: ArtifactKind,
    required_inputs: BTreeSet<TemplateInput>,
    fields: Vec<FieldSpec>,
}

impl TemplateSpec {
    /// Build a template
    ///
    /// # Errors
    /// - [`TemplateError::EmptyTemplateId`] for a blank id
    /// - [`TemplateError::DuplicateField`] if two fields share a name
    pub fn new(
        template_id: impl Into<String>,
        output: ArtifactKind,
        required_inputs: impl IntoIterator<Item = TemplateInput>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, TemplateError> {
        let template_id = template_id.into();
        if template_id.trim().is_empty() {
            return Err(TemplateError::EmptyTemplateId);
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(TemplateError::DuplicateField {
                    template: template_id,
                    field: field.name.clone(),
                });
            }
        }

        Ok(Self {
            template_id,
            output,
            required_inputs: required_inputs.into_iter().collect(),
            fields,
        })
    }

    #[inline]
    #[must_use]
    pub fn template_id(&self) -> &str {
        &self.template_id
    }

    #[inline]
    #[must_use]
    pub fn output(&self) -> ArtifactKind {
        self.output
    }

    #[inline]
    #[must_use]
    pub fn required_inputs(&self) -> &BTreeSet<TemplateInput> {
        &self.required_inputs
    }

    #[inline]
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check that every field names a registered block
    ///
    /// # Errors
    /// [`TemplateError::UnknownBlock`] for the first unregistered id.
    pub fn validate_blocks(&self, registry: &BlockRegistry) -> Result<(), TemplateError> {
        match self.fields.iter().find(|f| !registry.contains(&f.block_id)) {
            Some(field) => Err(TemplateError::UnknownBlock {
                template: self.template_id.clone(),
                field: field.name.clone(),
                block: field.block_id.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn record_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::with_hint("title", "title", RenderHint::Raw),
        FieldSpec::with_hint("ingredients", "key_ingredients", RenderHint::Bullet),
        FieldSpec::with_hint("benefits", "benefits", RenderHint::Bullet),
        FieldSpec::with_hint("usage", "usage", RenderHint::Paragraph),
        FieldSpec::with_hint("safety", "safety", RenderHint::Paragraph),
        FieldSpec::with_hint("price", "price", RenderHint::Raw),
    ]
}

/// Product page template
#[must_use]
pub fn product_page_template() -> TemplateSpec {
    TemplateSpec {
        template_id: "product_page".to_string(),
        output: ArtifactKind::ProductPage,
        required_inputs: BTreeSet::from([TemplateInput::Product]),
        fields: record_fields(),
    }
}

/// FAQ page template
#[must_use]
pub fn faq_template() -> TemplateSpec {
    TemplateSpec {
        template_id: "faq_page".to_string(),
        output: ArtifactKind::Faq,
        required_inputs: BTreeSet::from([TemplateInput::Product]),
        fields: record_fields(),
    }
}

/// Comparison page template
#[must_use]
pub fn comparison_template() -> TemplateSpec {
    TemplateSpec {
        template_id: "comparison_page".to_string(),
        output: ArtifactKind::Comparison,
        required_inputs: BTreeSet::from([TemplateInput::Product, TemplateInput::Counterpart]),
        fields: vec![
            FieldSpec::with_hint("meta", "product_b_meta", RenderHint::Raw),
            FieldSpec::with_hint("comparison", "comparison_rows", RenderHint::Raw),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn unknown_hint_is_rejected_at_construction() {
        let err = FieldSpec::new("usage", "usage", "markdown").unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnknownHint {
                field: "usage".into(),
                hint: "markdown".into()
            }
        );
        assert!(FieldSpec::new("usage", "usage", "paragraph").is_ok());
    }

    #[test]
    fn duplicate_field_is_rejected() {
        let fields = vec![
            FieldSpec::with_hint("title", "title", RenderHint::Raw),
            FieldSpec::with_hint("title", "usage", RenderHint::Raw),
        ];
        let err = TemplateSpec::new("t", ArtifactKind::Faq, [TemplateInput::Product], fields)
            .unwrap_err();
        assert!(matches!(err, TemplateError::DuplicateField { .. }));
    }

    #[test]
    fn builtin_templates_reference_registered_blocks() {
        let registry = BlockRegistry::builtin();
        for spec in [product_page_template(), faq_template(), comparison_template()] {
            spec.validate_blocks(registry).unwrap();
        }
    }

    #[test]
    fn unregistered_block_is_reported() {
        let spec = TemplateSpec::new(
            "custom",
            ArtifactKind::ProductPage,
            [TemplateInput::Product],
            vec![FieldSpec::with_hint("reviews", "reviews", RenderHint::Raw)],
        )
        .unwrap();
        let err = spec.validate_blocks(BlockRegistry::builtin()).unwrap_err();
        assert_eq!(err.to_string(), "template 'custom' field 'reviews' references unknown block 'reviews'");
    }

    #[test]
    fn bullet_trims_and_drops_empties() {
        assert_eq!(
            RenderHint::Bullet.render(json!([" A ", "", "B"])),
            json!(["A", "B"])
        );
        assert_eq!(RenderHint::Bullet.render(json!(" solo ")), json!(["solo"]));
        assert_eq!(RenderHint::Bullet.render(json!("  ")), json!([]));
    }

    #[test]
    fn paragraph_collapses_whitespace() {
        assert_eq!(
            RenderHint::Paragraph.render(json!("  Apply   twice\n daily ")),
            json!("Apply twice daily")
        );
        assert_eq!(RenderHint::Paragraph.render(json!(["A", "B"])), json!("A, B"));
    }

    #[test]
    fn raw_is_identity() {
        let value = json!({"currency": "INR", "amount": 699});
        assert_eq!(RenderHint::Raw.render(value.clone()), value);
    }
}
