//! Testing utilities for the pagecraft workspace
//!
//! Shared fixtures: the reference product record and paths to the bundled
//! schema documents.

#![allow(missing_docs)]

use pagecraft_product::{normalize_value, NormalizedProduct, SyntheticCounterpart};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub const SAMPLE_NAME: &str = "GlowBoost Vitamin C Serum";
pub const SAMPLE_PRICE: u64 = 699;

/// The reference raw record
pub fn sample_raw_value() -> Value {
    json!({
        "Product Name": SAMPLE_NAME,
        "Concentration": "10% Vitamin C",
        "Skin Type": "Oily, Combination",
        "Key Ingredients": "Vitamin C, Hyaluronic Acid",
        "Benefits": "Brightening, Fades dark spots",
        "How to Use": "Apply 2–3 drops in the morning before sunscreen",
        "Side Effects": "Mild tingling for sensitive skin",
        "Price": "₹699"
    })
}

/// The reference record, normalized
pub fn sample_product() -> NormalizedProduct {
    normalize_value(&sample_raw_value()).expect("reference record normalizes")
}

pub fn sample_counterpart() -> SyntheticCounterpart {
    SyntheticCounterpart::fictional()
}

/// Write the reference raw record to `dir/product_input.json`
pub fn write_sample_input(dir: &Path) -> PathBuf {
    let path = dir.join("product_input.json");
    let text = serde_json::to_string_pretty(&sample_raw_value()).expect("fixture serializes");
    std::fs::write(&path, text).expect("fixture written");
    path
}

/// The workspace `schemas/` directory
pub fn schema_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("schemas")
}

/// Copy the bundled schemas into `dir`, returning `dir`
pub fn copy_schemas(dir: &Path) -> PathBuf {
    for name in [
        "product_page.schema.json",
        "faq.schema.json",
        "comparison_page.schema.json",
    ] {
        std::fs::copy(schema_dir().join(name), dir.join(name)).expect("schema copied");
    }
    dir.to_path_buf()
}
