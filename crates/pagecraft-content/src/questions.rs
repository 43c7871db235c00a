//! Question bank generation
//!
//! A fixed, ordered catalogue interpolated with record fields. For any product
//! with two or more benefits the bank holds at least 15 distinct questions
//! across at least 5 categories.

use pagecraft_product::NormalizedProduct;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Question categories, in catalogue order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QuestionCategory {
    Informational,
    Usage,
    Safety,
    Benefits,
    Purchase,
    Storage,
}

impl QuestionCategory {
    pub const ALL: [Self; 6] = [
        Self::Informational,
        Self::Usage,
        Self::Safety,
        Self::Benefits,
        Self::Purchase,
        Self::Storage,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Usage => "Usage",
            Self::Safety => "Safety",
            Self::Benefits => "Benefits",
            Self::Purchase => "Purchase",
            Self::Storage => "Storage",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalogue entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionItem {
    pub category: String,
    pub question: String,
}

impl QuestionItem {
    #[must_use]
    pub fn new(category: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            question: question.into(),
        }
    }
}

/// Ordered, de-duplicated questions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QuestionBank {
    items: Vec<QuestionItem>,
}

impl QuestionBank {
    /// Build a bank: trim each question, drop empties, keep the first of
    /// any repeated text
    #[must_use]
    pub fn from_candidates(candidates: impl IntoIterator<Item = QuestionItem>) -> Self {
        let mut seen = HashSet::new();
        let items = candidates
            .into_iter()
            .filter_map(|item| {
                let question = item.question.trim();
                if question.is_empty() || !seen.insert(question.to_string()) {
                    return None;
                }
                Some(QuestionItem::new(item.category, question))
            })
            .collect();
        Self { items }
    }

    #[inline]
    #[must_use]
    pub fn items(&self) -> &[QuestionItem] {
        &self.items
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct category labels present in the bank
    #[must_use]
    pub fn categories(&self) -> BTreeSet<&str> {
        self.items.iter().map(|q| q.category.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionItem> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a QuestionItem;
    type IntoIter = std::slice::Iter<'a, QuestionItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn candidates(product: &NormalizedProduct) -> Vec<QuestionItem> {
    use QuestionCategory::{Benefits, Informational, Purchase, Safety, Storage, Usage};

    let name = product.name();
    let mut out = vec![
        (Informational, format!("What is {name}?")),
        (
            Informational,
            format!("How much {} does it contain?", product.concentration()),
        ),
        (Informational, format!("What are the key ingredients in {name}?")),
        (Usage, "How do I use this product?".to_string()),
        (Usage, "When should I apply it?".to_string()),
        (Usage, format!("Can I use {name} with other serums?")),
        (Safety, "Are there any side effects?".to_string()),
        (Safety, format!("Is {name} suitable for sensitive skin?")),
        (Safety, "What specifically should I watch out for?".to_string()),
    ];
    out.extend(
        product
            .benefits()
            .iter()
            .take(2)
            .map(|b| (Benefits, format!("Does this help with {}?", b.to_lowercase()))),
    );
    out.extend([
        (Benefits, "How long until I see results?".to_string()),
        (Purchase, format!("How much does {name} cost?")),
        (Purchase, "Is there a money-back guarantee?".to_string()),
        (Purchase, "Where can I buy it?".to_string()),
        (Storage, "How should I store this product?".to_string()),
    ]);

    out.into_iter()
        .map(|(category, question)| QuestionItem::new(category.as_str(), question))
        .collect()
}

/// Generate the question bank for a product
#[must_use]
pub fn generate_questions(product: &NormalizedProduct) -> QuestionBank {
    let bank = QuestionBank::from_candidates(candidates(product));
    tracing::debug!(
        questions = bank.len(),
        categories = bank.categories().len(),
        "generated question bank"
    );
    bank
}
