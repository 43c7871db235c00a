//! Answer resolution
//!
//! Answers are copied from the record or built from fixed labels plus record
//! values. A question with no matching trigger gets [`FALLBACK_ANSWER`].

use crate::questions::QuestionItem;
use pagecraft_product::{NormalizedProduct, CURRENCY_SYMBOL};
use serde::{Deserialize, Serialize};

/// Answer for questions the record cannot support
pub const FALLBACK_ANSWER: &str = "This information is not provided in the product dataset.";

/// Prefix of ingredient-list answers
pub const INGREDIENTS_LABEL: &str = "Key ingredients:";

/// Prefix of benefit-list answers
pub const BENEFITS_LABEL: &str = "Benefits:";

/// Prefix of price answers
pub const PRICE_LABEL: &str = "Price:";

/// A resolved question/answer pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Resolve the answer for one question. Total: never fails.
///
/// A branch fires when either the category or the question text carries its
/// trigger. Branches are tried in order: usage, safety, ingredients,
/// benefits, price.
#[must_use]
pub fn resolve_answer(product: &NormalizedProduct, item: &QuestionItem) -> String {
    let category = item.category.to_lowercase();
    let question = item.question.to_lowercase();

    if category.contains("usage") || contains_any(&question, &["how to use", "apply"]) {
        return product.how_to_use().to_string();
    }
    if category.contains("safety") || contains_any(&question, &["side effect", "tingl"]) {
        return product.side_effects().to_string();
    }
    if category.contains("ingredient") || question.contains("ingredient") {
        return format!("{INGREDIENTS_LABEL} {}", product.key_ingredients().join(", "));
    }
    if category.contains("benefit") || contains_any(&question, &["dark spot", "bright"]) {
        return format!("{BENEFITS_LABEL} {}", product.benefits().join(", "));
    }
    if contains_any(&category, &["price", "purchase"]) || question.contains("cost") {
        return format!("{PRICE_LABEL} {CURRENCY_SYMBOL}{}", product.price());
    }
    FALLBACK_ANSWER.to_string()
}

/// Resolve the first `limit` questions in order
#[must_use]
pub fn resolve_faqs<'a>(
    product: &NormalizedProduct,
    questions: impl IntoIterator<Item = &'a QuestionItem>,
    limit: usize,
) -> Vec<FaqEntry> {
    questions
        .into_iter()
        .take(limit)
        .map(|item| FaqEntry {
            question: item.question.clone(),
            answer: resolve_answer(product, item),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::generate_questions;
    use pagecraft_test_utils::sample_product;
    use pretty_assertions::assert_eq;

    fn answer(category: &str, question: &str) -> String {
        resolve_answer(&sample_product(), &QuestionItem::new(category, question))
    }

    #[test]
    fn triggers_resolve_from_the_record() {
        assert_eq!(
            answer("Usage", "When should I apply it?"),
            "Apply 2–3 drops in the morning before sunscreen"
        );
        assert_eq!(
            answer("Safety", "Are there any side effects?"),
            "Mild tingling for sensitive skin"
        );
        assert_eq!(
            answer("Informational", "What are the key ingredients?"),
            "Key ingredients: Vitamin C, Hyaluronic Acid"
        );
        assert_eq!(
            answer("Benefits", "Does this help with dark spots?"),
            "Benefits: Brightening, Fades dark spots"
        );
        assert_eq!(answer("Purchase", "How much does it cost?"), "Price: ₹699");
    }

    #[test]
    fn category_alone_selects_the_answer() {
        let product = sample_product();
        assert_eq!(answer("Usage", "How do I use this product?"), product.how_to_use());
        assert_eq!(answer("Usage", "Can I use it with retinol?"), product.how_to_use());
        assert_eq!(
            answer("Safety", "Is GlowBoost Vitamin C Serum suitable for sensitive skin?"),
            product.side_effects()
        );
        assert_eq!(
            answer("Benefits", "How long until I see results?"),
            "Benefits: Brightening, Fades dark spots"
        );
        assert_eq!(answer("Purchase", "Where can I buy it?"), "Price: ₹699");
    }

    #[test]
    fn question_text_alone_selects_the_answer() {
        let product = sample_product();
        assert_eq!(answer("", "How to use it at night?"), product.how_to_use());
        assert_eq!(answer("General", "Will it make me tingle?"), product.side_effects());
        assert_eq!(
            answer("General", "Is it good for brightness?"),
            "Benefits: Brightening, Fades dark spots"
        );
        assert_eq!(answer("General", "What does it cost?"), "Price: ₹699");
    }

    #[test]
    fn earlier_branches_win() {
        let product = sample_product();
        // usage outranks price even when the question mentions cost
        assert_eq!(answer("Usage", "Does applying it cost extra?"), product.how_to_use());
        assert_eq!(
            answer("Safety", "Which ingredient causes tingling?"),
            product.side_effects()
        );
    }

    #[test]
    fn unmatched_questions_fall_back() {
        assert_eq!(answer("Storage", "How should I store this product?"), FALLBACK_ANSWER);
        assert_eq!(answer("Storage", "Is it vegan?"), FALLBACK_ANSWER);
        assert_eq!(answer("", ""), FALLBACK_ANSWER);
    }

    #[test]
    fn faqs_take_the_first_questions() {
        let product = sample_product();
        let bank = generate_questions(&product);
        let faqs = resolve_faqs(&product, &bank, 5);

        assert_eq!(faqs.len(), 5);
        assert_eq!(faqs[0].question, bank.items()[0].question);
        assert_eq!(faqs[2].answer, "Key ingredients: Vitamin C, Hyaluronic Acid");
        assert_eq!(faqs[3].question, "How do I use this product?");
        assert_eq!(faqs[3].answer, product.how_to_use());
        assert_eq!(faqs[4].answer, product.how_to_use());
        assert!(faqs.iter().skip(2).all(|f| f.answer != FALLBACK_ANSWER));
    }
}
