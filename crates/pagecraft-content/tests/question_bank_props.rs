//! Question bank and answer properties over arbitrary records

use pagecraft_content::{generate_questions, resolve_answer, QuestionItem, FALLBACK_ANSWER};
use pagecraft_product::normalize_value;
use proptest::prelude::*;
use serde_json::json;
use std::collections::HashSet;

fn record(name: &str, concentration: &str, benefits: &str, price: &str) -> serde_json::Value {
    json!({
        "Product Name": name,
        "Concentration": concentration,
        "Skin Type": "All",
        "Key Ingredients": "Niacinamide, Zinc",
        "Benefits": benefits,
        "How to Use": "Apply nightly",
        "Side Effects": "None known",
        "Price": price
    })
}

proptest! {
    #[test]
    fn bank_is_large_unique_and_diverse(
        name in "[A-Za-z][A-Za-z ]{0,23}",
        concentration in "[0-9]{1,2}% [A-Za-z]{1,10}",
        b1 in "[A-Za-z]{1,12}",
        b2 in "[A-Za-z]{1,12}",
    ) {
        let product = normalize_value(&record(&name, &concentration, &format!("{b1}, {b2}"), "₹100")).unwrap();
        let bank = generate_questions(&product);

        prop_assert!(bank.len() >= 15, "only {} questions", bank.len());
        prop_assert!(bank.categories().len() >= 5);

        let mut seen = HashSet::new();
        for item in &bank {
            prop_assert!(!item.question.is_empty());
            prop_assert_eq!(item.question.trim(), item.question.as_str());
            prop_assert!(seen.insert(item.question.clone()));
        }
    }

    #[test]
    fn generation_is_deterministic(name in "[A-Za-z][A-Za-z ]{0,23}") {
        let product = normalize_value(&record(&name, "10% C", "Glow, Calm", "₹1")).unwrap();
        prop_assert_eq!(generate_questions(&product), generate_questions(&product));
    }

    #[test]
    fn resolver_is_total(category in ".{0,16}", question in ".{0,40}") {
        let product = normalize_value(&record("Serum", "5% Niacinamide", "Glow", "₹450")).unwrap();
        let answer = resolve_answer(&product, &QuestionItem::new(category, question));
        prop_assert!(!answer.is_empty());
    }
}

#[test]
fn unsupported_question_gets_fallback() {
    let product = normalize_value(&record("Serum", "5% Niacinamide", "Glow", "₹450")).unwrap();
    let answer = resolve_answer(
        &product,
        &QuestionItem::new("Storage", "Is it vegan?"),
    );
    assert_eq!(answer, FALLBACK_ANSWER);
}
