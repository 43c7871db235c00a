//! pagecraft product records
//!
//! - [`RawProductInput`]: the labelled input record
//! - [`NormalizedProduct`]: the immutable, normalized source of truth
//! - [`SyntheticCounterpart`]: the fixed fictional product for comparisons
//!
//! # Example
//!
//! ```rust
//! use pagecraft_product::{normalize, RawProductInput};
//!
//! let raw = RawProductInput::from_json_str(r#"{
//!     "Product Name": "Serum", "Concentration": "5% Niacinamide",
//!     "Skin Type": "Oily", "Key Ingredients": "Niacinamide,, Zinc",
//!     "Benefits": "Oil control", "How to Use": "Apply nightly",
//!     "Side Effects": "None known", "Price": "₹450"
//! }"#)?;
//! let product = normalize(&raw)?;
//! assert_eq!(product.key_ingredients(), ["Niacinamide", "Zinc"]);
//! assert_eq!(product.price(), 450);
//! # Ok::<(), pagecraft_product::ProductError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod counterpart;
pub mod error;
pub mod model;
pub mod normalize;

pub use counterpart::{generate_counterpart, SyntheticCounterpart, COUNTERPART_NAME};
pub use error::ProductError;
pub use model::{NormalizedProduct, RawProductInput, CURRENCY_CODE, CURRENCY_SYMBOL};
pub use normalize::{normalize, normalize_value, parse_price, split_list};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
