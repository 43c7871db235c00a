//! Content blocks
//!
//! A block is a pure function from the product record (or the record plus the
//! fictional counterpart) to one field value. Blocks never invent text: every
//! string they emit is copied from their inputs or is a fixed label.

use crate::error::BlockError;
use once_cell::sync::Lazy;
use pagecraft_product::{NormalizedProduct, SyntheticCounterpart, CURRENCY_CODE};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;

/// Comparison row label for the product name
pub const ROW_NAME: &str = "Name";
/// Comparison row label for ingredients
pub const ROW_KEY_INGREDIENTS: &str = "Key Ingredients";
/// Comparison row label for benefits
pub const ROW_BENEFITS: &str = "Benefits";
/// Comparison row label for the price
pub const ROW_PRICE: &str = "Price (INR)";

/// Block over the product record alone
pub type RecordBlockFn = fn(&NormalizedProduct) -> Value;

/// Block over the product record and the counterpart
pub type PairBlockFn = fn(&NormalizedProduct, &SyntheticCounterpart) -> Value;

/// A registered block
#[derive(Clone, Copy)]
pub enum Block {
    Record(RecordBlockFn),
    Pair(PairBlockFn),
}

impl Block {
    #[inline]
    #[must_use]
    pub fn needs_counterpart(&self) -> bool {
        matches!(self, Self::Pair(_))
    }

    /// Evaluate the block
    ///
    /// # Errors
    /// [`BlockError::MissingCounterpart`] when a pair block has no
    /// counterpart to read.
    pub fn evaluate(
        &self,
        block_id: &str,
        product: &NormalizedProduct,
        counterpart: Option<&SyntheticCounterpart>,
    ) -> Result<Value, BlockError> {
        match self {
            Self::Record(f) => Ok(f(product)),
            Self::Pair(f) => counterpart
                .map(|b| f(product, b))
                .ok_or_else(|| BlockError::MissingCounterpart(block_id.to_string())),
        }
    }
}

impl fmt::Debug for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Record(_) => f.write_str("Block::Record"),
            Self::Pair(_) => f.write_str("Block::Pair"),
        }
    }
}

/// Block id -> block dispatch table
#[derive(Debug, Clone, Default)]
pub struct BlockRegistry {
    blocks: HashMap<&'static str, Block>,
}

static BUILTIN: Lazy<BlockRegistry> = Lazy::new(BlockRegistry::with_builtins);

impl BlockRegistry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in block
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("title", Block::Record(title));
        registry.register("key_ingredients", Block::Record(key_ingredients));
        registry.register("benefits", Block::Record(benefits));
        registry.register("usage", Block::Record(usage));
        registry.register("safety", Block::Record(safety));
        registry.register("price", Block::Record(price));
        registry.register("comparison_rows", Block::Pair(comparison_rows));
        registry.register("product_b_meta", Block::Pair(product_b_meta));
        registry
    }

    /// Shared built-in registry
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Register a block, returning the one it replaced
    pub fn register(&mut self, block_id: &'static str, block: Block) -> Option<Block> {
        self.blocks.insert(block_id, block)
    }

    #[must_use]
    pub fn get(&self, block_id: &str) -> Option<Block> {
        self.blocks.get(block_id).copied()
    }

    #[must_use]
    pub fn contains(&self, block_id: &str) -> bool {
        self.blocks.contains_key(block_id)
    }

    /// Registered ids, sorted
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<&'static str> = self.blocks.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Look up and evaluate a block
    ///
    /// # Errors
    /// [`BlockError::Unknown`] for an unregistered id, otherwise as
    /// [`Block::evaluate`].
    pub fn evaluate(
        &self,
        block_id: &str,
        product: &NormalizedProduct,
        counterpart: Option<&SyntheticCounterpart>,
    ) -> Result<Value, BlockError> {
        self.get(block_id)
            .ok_or_else(|| BlockError::Unknown(block_id.to_string()))?
            .evaluate(block_id, product, counterpart)
    }
}

/// `{currency, amount}` price object
#[must_use]
pub fn price_value(amount: u64) -> Value {
    json!({ "currency": CURRENCY_CODE, "amount": amount })
}

fn title(product: &NormalizedProduct) -> Value {
    json!(product.name())
}

fn key_ingredients(product: &NormalizedProduct) -> Value {
    json!(product.key_ingredients())
}

fn benefits(product: &NormalizedProduct) -> Value {
    json!(product.benefits())
}

fn usage(product: &NormalizedProduct) -> Value {
    json!(product.how_to_use())
}

fn safety(product: &NormalizedProduct) -> Value {
    json!(format!("Note: {}", product.side_effects()))
}

fn price(product: &NormalizedProduct) -> Value {
    price_value(product.price())
}

fn comparison_rows(a: &NormalizedProduct, b: &SyntheticCounterpart) -> Value {
    json!([
        { "attribute": ROW_NAME, "product_a_value": a.name(), "product_b_value": b.name() },
        {
            "attribute": ROW_KEY_INGREDIENTS,
            "product_a_value": a.key_ingredients(),
            "product_b_value": b.key_ingredients()
        },
        { "attribute": ROW_BENEFITS, "product_a_value": a.benefits(), "product_b_value": b.benefits() },
        { "attribute": ROW_PRICE, "product_a_value": a.price(), "product_b_value": b.price() }
    ])
}

fn product_b_meta(_a: &NormalizedProduct, b: &SyntheticCounterpart) -> Value {
    json!({ "product_b_fictional": true, "product_b_name": b.name() })
}
