//! pagecraft content
//!
//! Everything between the normalized record and an artifact draft:
//!
//! - [`blocks`]: pure field generators behind a dispatch table
//! - [`template`]: declarative field-to-block mappings with render hints
//! - [`questions`] and [`answers`]: the FAQ question bank and its answers
//! - [`assembly`]: one assembler per page kind
//!
//! # Example
//!
//! ```rust
//! use pagecraft_content::{AssemblyInputs, PageAssembler, ProductPageAssembler};
//! use pagecraft_product::normalize_value;
//! use serde_json::json;
//!
//! let product = normalize_value(&json!({
//!     "Product Name": "Serum", "Concentration": "5% Niacinamide",
//!     "Skin Type": "Oily", "Key Ingredients": "Niacinamide, Zinc",
//!     "Benefits": "Oil control", "How to Use": "Apply nightly",
//!     "Side Effects": "None known", "Price": "₹450"
//! }))?;
//! let draft = ProductPageAssembler::new().assemble(&AssemblyInputs::new(&product))?;
//! assert_eq!(draft.get_path("pricing.amount"), Some(&json!(450)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod answers;
pub mod assembly;
pub mod blocks;
pub mod draft;
pub mod error;
pub mod questions;
pub mod template;

pub use answers::{resolve_answer, resolve_faqs, FaqEntry, FALLBACK_ANSWER};
pub use assembly::{
    AssemblyInputs, ComparisonPageAssembler, FaqPageAssembler, PageAssembler,
    ProductPageAssembler, DEFAULT_FAQ_LIMIT,
};
pub use blocks::{Block, BlockRegistry};
pub use draft::{ArtifactDraft, ArtifactKind};
pub use error::{AssemblyError, BlockError, TemplateError};
pub use questions::{generate_questions, QuestionBank, QuestionCategory, QuestionItem};
pub use template::{
    comparison_template, faq_template, product_page_template, FieldSpec, RenderHint,
    TemplateInput, TemplateSpec,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
