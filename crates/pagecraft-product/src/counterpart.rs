//! Fictional comparison counterpart
//!
//! The comparison page needs a second product. It is a fixed, clearly
//! fictional record and is never derived from the real input.

use serde::Serialize;

/// Display name of the fictional counterpart
pub const COUNTERPART_NAME: &str = "Fictional Product B";

/// Synthetic second product used only by the comparison page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticCounterpart {
    name: String,
    key_ingredients: Vec<String>,
    benefits: Vec<String>,
    price: u64,
}

impl SyntheticCounterpart {
    /// The fixed fictional product
    #[must_use]
    pub fn fictional() -> Self {
        Self {
            name: COUNTERPART_NAME.to_string(),
            key_ingredients: vec![
                "Water".to_string(),
                "Glycerin".to_string(),
                "Alcohol Denat".to_string(),
            ],
            benefits: vec!["Hydration".to_string(), "Cooling".to_string()],
            price: 1500,
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn key_ingredients(&self) -> &[String] {
        &self.key_ingredients
    }

    #[inline]
    #[must_use]
    pub fn benefits(&self) -> &[String] {
        &self.benefits
    }

    #[inline]
    #[must_use]
    pub fn price(&self) -> u64 {
        self.price
    }
}

/// Produce the counterpart for a run
#[must_use]
pub fn generate_counterpart() -> SyntheticCounterpart {
    let counterpart = SyntheticCounterpart::fictional();
    tracing::debug!(name = %counterpart.name, "generated fictional counterpart");
    counterpart
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterpart_is_fixed() {
        let a = generate_counterpart();
        let b = generate_counterpart();
        assert_eq!(a, b);
        assert_eq!(a.name(), COUNTERPART_NAME);
        assert_eq!(a.key_ingredients(), ["Water", "Glycerin", "Alcohol Denat"]);
        assert_eq!(a.benefits(), ["Hydration", "Cooling"]);
        assert_eq!(a.price(), 1500);
    }
}
