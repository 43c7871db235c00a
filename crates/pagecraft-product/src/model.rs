//! Product records
//!
//! [`RawProductInput`] mirrors the input file one-to-one, labels included.
//! [`NormalizedProduct`] is what every later stage reads; it is only built by
//! [`normalize`](crate::normalize::normalize) and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// ISO currency code used for every persisted price
pub const CURRENCY_CODE: &str = "INR";

/// Currency symbol used in generated prose
pub const CURRENCY_SYMBOL: &str = "₹";

/// The raw input record, exactly as labelled in the input file
///
/// Every label is required and no other label is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProductInput {
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Concentration")]
    pub concentration: String,
    #[serde(rename = "Skin Type")]
    pub skin_type: String,
    #[serde(rename = "Key Ingredients")]
    pub key_ingredients: String,
    #[serde(rename = "Benefits")]
    pub benefits: String,
    #[serde(rename = "How to Use")]
    pub how_to_use: String,
    #[serde(rename = "Side Effects")]
    pub side_effects: String,
    #[serde(rename = "Price")]
    pub price: String,
}

impl RawProductInput {
    /// External field labels, in file order
    pub const LABELS: [&'static str; 8] = [
        "Product Name",
        "Concentration",
        "Skin Type",
        "Key Ingredients",
        "Benefits",
        "How to Use",
        "Side Effects",
        "Price",
    ];
}

/// Normalized product record
///
/// Single source of truth for every fact that may appear in an artifact.
/// List fields hold trimmed, non-empty items in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedProduct {
    pub(crate) name: String,
    pub(crate) concentration: String,
    pub(crate) skin_type: Vec<String>,
    pub(crate) key_ingredients: Vec<String>,
    pub(crate) benefits: Vec<String>,
    pub(crate) how_to_use: String,
    pub(crate) side_effects: String,
    pub(crate) price: u64,
}

impl NormalizedProduct {
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn concentration(&self) -> &str {
        &self.concentration
    }

    #[inline]
    #[must_use]
    pub fn skin_type(&self) -> &[String] {
        &self.skin_type
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
    pub fn how_to_use(&self) -> &str {
        &self.how_to_use
    }

    #[inline]
    #[must_use]
    pub fn side_effects(&self) -> &str {
        &self.side_effects
    }

    /// Price in whole rupees
    #[inline]
    #[must_use]
    pub fn price(&self) -> u64 {
        self.price
    }
}
