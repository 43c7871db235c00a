//! Fact provenance checks
//!
//! Every ingredient, benefit and price an artifact states must come from the
//! product record. FAQ answers are additionally screened for placeholder
//! text, and any percentage must travel with the record's concentration.

use crate::error::CertifyError;
use once_cell::sync::Lazy;
use pagecraft_content::answers::{BENEFITS_LABEL, INGREDIENTS_LABEL};
use pagecraft_content::blocks::{ROW_BENEFITS, ROW_KEY_INGREDIENTS, ROW_NAME, ROW_PRICE};
use pagecraft_content::ArtifactKind;
use pagecraft_product::{NormalizedProduct, CURRENCY_SYMBOL};
use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)placeholder|lorem\s+ipsum|\{\{|\}\}|\bTBD\b")
        .expect("placeholder regex must compile")
});

/// Semantic validator bound to one product record
#[derive(Debug)]
pub struct FactGuard<'a> {
    product: &'a NormalizedProduct,
    ingredients: HashSet<&'a str>,
    benefits: HashSet<&'a str>,
}

impl<'a> FactGuard<'a> {
    #[must_use]
    pub fn new(product: &'a NormalizedProduct) -> Self {
        Self {
            product,
            ingredients: product.key_ingredients().iter().map(String::as_str).collect(),
            benefits: product.benefits().iter().map(String::as_str).collect(),
        }
    }

    /// Check an artifact of the given kind
    ///
    /// # Errors
    /// [`CertifyError::ContentViolation`] for the first unsupported fact.
    pub fn check(&self, kind: ArtifactKind, artifact: &Value) -> Result<(), CertifyError> {
        match kind {
            ArtifactKind::ProductPage => self.check_product_page(artifact),
            ArtifactKind::Faq => self.check_faq_page(artifact),
            ArtifactKind::Comparison => self.check_comparison_page(artifact),
        }
    }

    /// # Errors
    /// [`CertifyError::ContentViolation`] for the first unsupported fact.
    pub fn check_product_page(&self, page: &Value) -> Result<(), CertifyError> {
        self.check_name("product page hero.title", page.pointer("/hero/title"))?;
        self.check_list(
            "product page details.ingredients",
            page.pointer("/details/ingredients"),
            &self.ingredients,
            "ingredient",
        )?;
        self.check_list(
            "product page details.benefits",
            page.pointer("/details/benefits"),
            &self.benefits,
            "benefit",
        )?;
        self.check_price("product page pricing.amount", page.pointer("/pricing/amount"))
    }

    /// # Errors
    /// [`CertifyError::ContentViolation`] for the first unsupported fact.
    pub fn check_faq_page(&self, page: &Value) -> Result<(), CertifyError> {
        self.check_name("faq title", page.get("title"))?;
        self.check_list(
            "faq ingredients",
            page.get("ingredients"),
            &self.ingredients,
            "ingredient",
        )?;
        self.check_list("faq benefits", page.get("benefits"), &self.benefits, "benefit")?;
        self.check_price("faq price.amount", page.pointer("/price/amount"))?;

        let faqs = page.get("faqs").and_then(Value::as_array);
        for (idx, faq) in faqs.into_iter().flatten().enumerate() {
            let answer = faq.get("answer").and_then(Value::as_str).unwrap_or_default();
            self.check_answer(&format!("faq answer #{}", idx + 1), answer)?;
        }
        Ok(())
    }

    /// # Errors
    /// [`CertifyError::ContentViolation`] for the first unsupported fact.
    pub fn check_comparison_page(&self, page: &Value) -> Result<(), CertifyError> {
        self.check_name("comparison product_a.name", page.pointer("/product_a/name"))?;

        let rows = page.get("comparison").and_then(Value::as_array);
        for row in rows.into_iter().flatten() {
            let value = row.get("product_a_value");
            match row.get("attribute").and_then(Value::as_str) {
                Some(ROW_NAME) => self.check_name("comparison row 'Name'", value)?,
                Some(ROW_KEY_INGREDIENTS) => self.check_list(
                    "comparison row 'Key Ingredients'",
                    value,
                    &self.ingredients,
                    "ingredient",
                )?,
                Some(ROW_BENEFITS) => self.check_list(
                    "comparison row 'Benefits'",
                    value,
                    &self.benefits,
                    "benefit",
                )?,
                Some(ROW_PRICE) => self.check_price("comparison row 'Price (INR)'", value)?,
                _ => {}
            }
        }
        Ok(())
    }

    /// Screen one FAQ answer
    ///
    /// # Errors
    /// [`CertifyError::ContentViolation`] naming the offending text.
    pub fn check_answer(&self, context: &str, answer: &str) -> Result<(), CertifyError> {
        if let Some(marker) = PLACEHOLDER.find(answer) {
            return Err(CertifyError::content(
                context,
                format!("placeholder marker '{}' in answer", marker.as_str()),
            ));
        }

        let price = self.product.price().to_string();
        if answer.contains(CURRENCY_SYMBOL) && !answer.contains(&price) {
            return Err(CertifyError::content(
                context,
                format!("price in answer does not match record price {price}: {answer:?}"),
            ));
        }

        for (label, allowed, what) in [
            (INGREDIENTS_LABEL, &self.ingredients, "ingredient"),
            (BENEFITS_LABEL, &self.benefits, "benefit"),
        ] {
            if let Some((_, rest)) = answer.split_once(label) {
                for item in rest.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                    if !allowed.contains(item) {
                        return Err(CertifyError::content(
                            context,
                            format!("{what} '{item}' is not in the product record"),
                        ));
                    }
                }
            }
        }

        if answer.contains('%') && !answer.contains(self.product.concentration()) {
            return Err(CertifyError::content(
                context,
                format!(
                    "percentage without the record concentration '{}': {answer:?}",
                    self.product.concentration()
                ),
            ));
        }
        Ok(())
    }

    fn check_name(&self, context: &str, value: Option<&Value>) -> Result<(), CertifyError> {
        match value.and_then(Value::as_str) {
            Some(name) if name == self.product.name() => Ok(()),
            Some(name) => Err(CertifyError::content(
                context,
                format!("name '{name}' does not match the record"),
            )),
            None => Err(CertifyError::content(context, "name is missing")),
        }
    }

    fn check_list(
        &self,
        context: &str,
        value: Option<&Value>,
        allowed: &HashSet<&str>,
        what: &str,
    ) -> Result<(), CertifyError> {
        let Some(items) = value.and_then(Value::as_array) else {
            return Err(CertifyError::content(context, format!("{what} list is missing")));
        };
        for item in items {
            match item.as_str() {
                Some(s) if allowed.contains(s) => {}
                Some(s) => {
                    return Err(CertifyError::content(
                        context,
                        format!("{what} '{s}' is not in the product record"),
                    ))
                }
                None => {
                    return Err(CertifyError::content(
                        context,
                        format!("{what} entry {item} is not text"),
                    ))
                }
            }
        }
        Ok(())
    }

    fn check_price(&self, context: &str, value: Option<&Value>) -> Result<(), CertifyError> {
        match value.and_then(Value::as_u64) {
            Some(amount) if amount == self.product.price() => Ok(()),
            Some(amount) => Err(CertifyError::content(
                context,
                format!("price {amount} does not match record price {}", self.product.price()),
            )),
            None => Err(CertifyError::content(context, "price is missing or not an integer")),
        }
    }
}
