//! Input normalization
//!
//! Raw record -> [`NormalizedProduct`]. Pure: the same input always yields an
//! identical record.

use crate::error::ProductError;
use crate::model::{NormalizedProduct, RawProductInput};
use serde_json::Value;
use std::path::Path;

impl RawProductInput {
    /// Parse a raw record from an already-decoded JSON value
    ///
    /// # Errors
    /// [`ProductError::SchemaViolation`] on unknown labels, missing labels or
    /// non-string values.
    pub fn from_value(value: &Value) -> Result<Self, ProductError> {
        if !value.is_object() {
            return Err(ProductError::schema_violation(
                "product record must be a JSON object",
            ));
        }
        serde_json::from_value(value.clone())
            .map_err(|e| ProductError::schema_violation(e.to_string()))
    }

    /// Parse a raw record from JSON text
    ///
    /// # Errors
    /// [`ProductError::Json`] if the text is not JSON, otherwise as
    /// [`RawProductInput::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self, ProductError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Read and parse a raw record from a file
    ///
    /// # Errors
    /// [`ProductError::Io`] if the file cannot be read, otherwise as
    /// [`RawProductInput::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ProductError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ProductError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

/// Split a comma-delimited field into trimmed, non-empty items
///
/// `"A,, B"` becomes `["A", "B"]`.
#[must_use]
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the integer price from a display string
///
/// Every non-digit character is dropped, so currency symbols and thousands
/// separators disappear (`"₹1,299"` is 1299). No digits at all means 0.
///
/// # Errors
/// [`ProductError::SchemaViolation`] if the digits do not fit in a `u64`.
pub fn parse_price(value: &str) -> Result<u64, ProductError> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    digits
        .parse::<u64>()
        .map_err(|_| ProductError::schema_violation(format!("price '{value}' is out of range")))
}

fn required_text(label: &str, value: &str) -> Result<String, ProductError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ProductError::schema_violation(format!(
            "'{label}' must not be blank"
        )));
    }
    Ok(value.to_string())
}

/// Normalize a raw record
///
/// "Product Name", "How to Use" and "Side Effects" end up verbatim in page
/// titles and answers, so they must hold more than whitespace.
///
/// # Errors
/// [`ProductError::SchemaViolation`] if a required text field is blank or the
/// price does not fit in a `u64`.
pub fn normalize(raw: &RawProductInput) -> Result<NormalizedProduct, ProductError> {
    let product = NormalizedProduct {
        name: required_text("Product Name", &raw.product_name)?,
        concentration: raw.concentration.trim().to_string(),
        skin_type: split_list(&raw.skin_type),
        key_ingredients: split_list(&raw.key_ingredients),
        benefits: split_list(&raw.benefits),
        how_to_use: required_text("How to Use", &raw.how_to_use)?,
        side_effects: required_text("Side Effects", &raw.side_effects)?,
        price: parse_price(&raw.price)?,
    };

    tracing::debug!(
        product = %product.name,
        ingredients = product.key_ingredients.len(),
        benefits = product.benefits.len(),
        price = product.price,
        "normalized product record"
    );
    Ok(product)
}

/// Parse and normalize in one step
///
/// # Errors
/// Any [`ProductError`] from parsing or normalization.
pub fn normalize_value(value: &Value) -> Result<NormalizedProduct, ProductError> {
    normalize(&RawProductInput::from_value(value)?)
}
