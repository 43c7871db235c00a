//! Page assemblers
//!
//! Each assembler evaluates its template's fields against the record and
//! places the rendered values under the page's structural keys. Missing
//! optional fields default to empty values; a missing required input is a
//! wiring error.

use crate::answers::resolve_faqs;
use crate::blocks::{price_value, BlockRegistry};
use crate::draft::{ArtifactDraft, ArtifactKind};
use crate::error::AssemblyError;
use crate::questions::QuestionBank;
use crate::template::{
    comparison_template, faq_template, product_page_template, TemplateInput, TemplateSpec,
};
use pagecraft_product::{NormalizedProduct, SyntheticCounterpart, COUNTERPART_NAME};
use serde_json::{json, Map, Value};

/// Number of resolved question/answer pairs on the FAQ page
pub const DEFAULT_FAQ_LIMIT: usize = 5;

/// Whatever the pipeline has produced so far
#[derive(Debug, Clone, Copy, Default)]
pub struct AssemblyInputs<'a> {
    pub product: Option<&'a NormalizedProduct>,
    pub counterpart: Option<&'a SyntheticCounterpart>,
    pub questions: Option<&'a QuestionBank>,
}

impl<'a> AssemblyInputs<'a> {
    #[must_use]
    pub fn new(product: &'a NormalizedProduct) -> Self {
        Self {
            product: Some(product),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_counterpart(mut self, counterpart: &'a SyntheticCounterpart) -> Self {
        self.counterpart = Some(counterpart);
        self
    }

    #[must_use]
    pub fn with_questions(mut self, questions: &'a QuestionBank) -> Self {
        self.questions = Some(questions);
        self
    }

    fn has(&self, input: TemplateInput) -> bool {
        match input {
            TemplateInput::Product => self.product.is_some(),
            TemplateInput::Counterpart => self.counterpart.is_some(),
            TemplateInput::Questions => self.questions.is_some(),
        }
    }

    /// Check the template's prerequisites and hand back the record
    fn require(&self, spec: &TemplateSpec) -> Result<&'a NormalizedProduct, AssemblyError> {
        let missing = spec
            .required_inputs()
            .iter()
            .copied()
            .find(|input| !self.has(*input));
        let missing = match (missing, self.product) {
            (Some(input), _) => input,
            (None, Some(product)) => return Ok(product),
            (None, None) => TemplateInput::Product,
        };
        Err(AssemblyError::Prerequisite {
            template: spec.template_id().to_string(),
            missing,
        })
    }
}

/// Turns pipeline inputs into one draft
pub trait PageAssembler {
    /// Template driving this assembler
    fn template(&self) -> &TemplateSpec;

    /// Build the draft
    ///
    /// # Errors
    /// [`AssemblyError::Prerequisite`] when a required input is absent, or a
    /// template/block error for a miswired template.
    fn assemble(&self, inputs: &AssemblyInputs<'_>) -> Result<ArtifactDraft, AssemblyError>;

    #[inline]
    fn kind(&self) -> ArtifactKind {
        self.template().output()
    }
}

/// Evaluate and render every template field
fn render_fields(
    spec: &TemplateSpec,
    registry: &BlockRegistry,
    product: &NormalizedProduct,
    counterpart: Option<&SyntheticCounterpart>,
) -> Result<Map<String, Value>, AssemblyError> {
    spec.validate_blocks(registry)?;
    let mut out = Map::new();
    for field in spec.fields() {
        let value = registry.evaluate(field.block_id(), product, counterpart)?;
        out.insert(field.name().to_string(), field.hint().render(value));
    }
    tracing::debug!(
        template = spec.template_id(),
        fields = out.len(),
        "rendered template fields"
    );
    Ok(out)
}

fn take_or(fields: &mut Map<String, Value>, key: &str, default: Value) -> Value {
    fields.remove(key).unwrap_or(default)
}

fn empty_list() -> Value {
    Value::Array(Vec::new())
}

fn empty_text() -> Value {
    Value::String(String::new())
}

fn empty_object() -> Value {
    Value::Object(Map::new())
}

/// Product page: hero, details, usage, safety, pricing
#[derive(Debug, Clone)]
pub struct ProductPageAssembler {
    template: TemplateSpec,
}

impl ProductPageAssembler {
    pub const GENERATED_BY: &'static str = "ProductPageAssembler";

    #[must_use]
    pub fn new() -> Self {
        Self {
            template: product_page_template(),
        }
    }
}

impl Default for ProductPageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAssembler for ProductPageAssembler {
    fn template(&self) -> &TemplateSpec {
        &self.template
    }

    fn assemble(&self, inputs: &AssemblyInputs<'_>) -> Result<ArtifactDraft, AssemblyError> {
        let product = inputs.require(&self.template)?;
        let mut fields = render_fields(&self.template, BlockRegistry::builtin(), product, None)?;

        let mut draft = ArtifactDraft::new(ArtifactKind::ProductPage);
        draft.set_path("meta.generated_by", json!(Self::GENERATED_BY));
        draft.set_path("hero.title", take_or(&mut fields, "title", empty_text()));
        draft.set_path(
            "details.ingredients",
            take_or(&mut fields, "ingredients", empty_list()),
        );
        draft.set_path(
            "details.benefits",
            take_or(&mut fields, "benefits", empty_list()),
        );
        draft.set("usage", take_or(&mut fields, "usage", empty_text()));
        draft.set("safety", take_or(&mut fields, "safety", empty_text()));
        draft.set("pricing", take_or(&mut fields, "price", empty_object()));

        tracing::info!(kind = %draft.kind(), fields = draft.fields().len(), "assembled draft");
        Ok(draft)
    }
}

/// FAQ page: record fields, the question bank and resolved answers
#[derive(Debug, Clone)]
pub struct FaqPageAssembler {
    template: TemplateSpec,
    faq_limit: usize,
}

impl FaqPageAssembler {
    pub const GENERATED_BY: &'static str = "FaqPageAssembler";

    #[must_use]
    pub fn new() -> Self {
        Self {
            template: faq_template(),
            faq_limit: DEFAULT_FAQ_LIMIT,
        }
    }

    /// Number of resolved questions to include, capped at [`DEFAULT_FAQ_LIMIT`]
    #[must_use]
    pub fn with_faq_limit(mut self, faq_limit: usize) -> Self {
        self.faq_limit = faq_limit.min(DEFAULT_FAQ_LIMIT);
        self
    }

    #[inline]
    #[must_use]
    pub fn faq_limit(&self) -> usize {
        self.faq_limit
    }
}

impl Default for FaqPageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAssembler for FaqPageAssembler {
    fn template(&self) -> &TemplateSpec {
        &self.template
    }

    fn assemble(&self, inputs: &AssemblyInputs<'_>) -> Result<ArtifactDraft, AssemblyError> {
        let product = inputs.require(&self.template)?;
        let mut fields = render_fields(&self.template, BlockRegistry::builtin(), product, None)?;

        let mut draft = ArtifactDraft::new(ArtifactKind::Faq);
        draft.set("title", take_or(&mut fields, "title", empty_text()));
        draft.set("ingredients", take_or(&mut fields, "ingredients", empty_list()));
        draft.set("benefits", take_or(&mut fields, "benefits", empty_list()));
        draft.set("usage", take_or(&mut fields, "usage", empty_text()));
        draft.set("safety", take_or(&mut fields, "safety", empty_text()));
        draft.set("price", take_or(&mut fields, "price", empty_object()));

        let questions = inputs.questions.map(QuestionBank::items).unwrap_or_default();
        draft.set(
            "question_bank",
            Value::Array(
                questions
                    .iter()
                    .map(|q| json!({ "category": q.category, "question": q.question }))
                    .collect(),
            ),
        );
        let faqs = resolve_faqs(product, questions, self.faq_limit);
        draft.set(
            "faqs",
            Value::Array(
                faqs.into_iter()
                    .map(|f| json!({ "question": f.question, "answer": f.answer }))
                    .collect(),
            ),
        );
        draft.set_path("meta.generated_by", json!(Self::GENERATED_BY));

        tracing::info!(
            kind = %draft.kind(),
            questions = questions.len(),
            faqs = self.faq_limit.min(questions.len()),
            "assembled draft"
        );
        Ok(draft)
    }
}

/// Comparison page against the fictional counterpart
#[derive(Debug, Clone)]
pub struct ComparisonPageAssembler {
    template: TemplateSpec,
}

impl ComparisonPageAssembler {
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: comparison_template(),
        }
    }
}

impl Default for ComparisonPageAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl PageAssembler for ComparisonPageAssembler {
    fn template(&self) -> &TemplateSpec {
        &self.template
    }

    fn assemble(&self, inputs: &AssemblyInputs<'_>) -> Result<ArtifactDraft, AssemblyError> {
        let product = inputs.require(&self.template)?;
        let counterpart = inputs.counterpart.ok_or_else(|| AssemblyError::Prerequisite {
            template: self.template.template_id().to_string(),
            missing: TemplateInput::Counterpart,
        })?;
        let mut fields = render_fields(
            &self.template,
            BlockRegistry::builtin(),
            product,
            Some(counterpart),
        )?;

        let mut draft = ArtifactDraft::new(ArtifactKind::Comparison);
        draft.set(
            "meta",
            take_or(
                &mut fields,
                "meta",
                json!({ "product_b_fictional": true, "product_b_name": COUNTERPART_NAME }),
            ),
        );
        draft.set("comparison", take_or(&mut fields, "comparison", empty_list()));
        draft.set_path("product_a.name", json!(product.name()));
        draft.set(
            "product_b",
            json!({
                "name": counterpart.name(),
                "key_ingredients": counterpart.key_ingredients(),
                "benefits": counterpart.benefits(),
                "price": price_value(counterpart.price()),
            }),
        );

        tracing::info!(kind = %draft.kind(), fields = draft.fields().len(), "assembled draft");
        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::generate_questions;
    use pagecraft_test_utils::sample_product;
    use pretty_assertions::assert_eq;

    #[test]
    fn product_page_layout() {
        let product = sample_product();
        let draft = ProductPageAssembler::new()
            .assemble(&AssemblyInputs::new(&product))
            .unwrap();

        let keys: Vec<&str> = draft.fields().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec!["meta", "hero", "details", "usage", "safety", "pricing"]
        );
        assert_eq!(draft.get_path("hero.title"), Some(&json!("GlowBoost Vitamin C Serum")));
        assert_eq!(
            draft.get_path("details.ingredients"),
            Some(&json!(["Vitamin C", "Hyaluronic Acid"]))
        );
        assert_eq!(draft.get_path("pricing.amount"), Some(&json!(699)));
    }

    #[test]
    fn faq_page_includes_bank_and_answers() {
        let product = sample_product();
        let bank = generate_questions(&product);
        let draft = FaqPageAssembler::new()
            .assemble(&AssemblyInputs::new(&product).with_questions(&bank))
            .unwrap();

        assert_eq!(draft.get("question_bank").unwrap().as_array().unwrap().len(), bank.len());
        let faqs = draft.get("faqs").unwrap().as_array().unwrap();
        assert_eq!(faqs.len(), DEFAULT_FAQ_LIMIT);
        assert_eq!(faqs[0]["question"], json!(bank.items()[0].question));
        assert_eq!(draft.get_path("meta.generated_by"), Some(&json!("FaqPageAssembler")));
    }

    #[test]
    fn faq_limit_never_exceeds_the_default() {
        let product = sample_product();
        let bank = generate_questions(&product);
        let assembler = FaqPageAssembler::new().with_faq_limit(40);
        assert_eq!(assembler.faq_limit(), DEFAULT_FAQ_LIMIT);

        let draft = assembler
            .assemble(&AssemblyInputs::new(&product).with_questions(&bank))
            .unwrap();
        assert_eq!(draft.get("faqs").unwrap().as_array().unwrap().len(), DEFAULT_FAQ_LIMIT);

        let fewer = FaqPageAssembler::new().with_faq_limit(2);
        assert_eq!(fewer.faq_limit(), 2);
    }

    #[test]
    fn faq_without_questions_defaults_to_empty_lists() {
        let product = sample_product();
        let draft = FaqPageAssembler::new()
            .with_faq_limit(3)
            .assemble(&AssemblyInputs::new(&product))
            .unwrap();
        assert_eq!(draft.get("question_bank"), Some(&json!([])));
        assert_eq!(draft.get("faqs"), Some(&json!([])));
    }

    #[test]
    fn comparison_page_marks_counterpart_fictional() {
        let product = sample_product();
        let counterpart = SyntheticCounterpart::fictional();
        let draft = ComparisonPageAssembler::new()
            .assemble(&AssemblyInputs::new(&product).with_counterpart(&counterpart))
            .unwrap();

        assert_eq!(
            draft.get("meta"),
            Some(&json!({"product_b_fictional": true, "product_b_name": "Fictional Product B"}))
        );
        assert_eq!(draft.get("comparison").unwrap().as_array().unwrap().len(), 4);
        assert_eq!(draft.get_path("product_a.name"), Some(&json!(product.name())));
        assert_eq!(draft.get_path("product_b.price.amount"), Some(&json!(1500)));
    }

    #[test]
    fn missing_product_is_a_prerequisite_error() {
        let err = ProductPageAssembler::new()
            .assemble(&AssemblyInputs::default())
            .unwrap_err();
        assert_eq!(
            err,
            AssemblyError::Prerequisite {
                template: "product_page".into(),
                missing: TemplateInput::Product
            }
        );
    }

    #[test]
    fn missing_counterpart_is_a_prerequisite_error() {
        let product = sample_product();
        let err = ComparisonPageAssembler::new()
            .assemble(&AssemblyInputs::new(&product))
            .unwrap_err();
        assert!(matches!(
            err,
            AssemblyError::Prerequisite {
                missing: TemplateInput::Counterpart,
                ..
            }
        ));
        assert!(err.to_string().contains("comparison counterpart"));
    }
}
