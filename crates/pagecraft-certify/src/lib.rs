//! pagecraft certification
//!
//! Two independent passes over persisted artifacts:
//!
//! - [`SchemaValidator`]: structural conformance to a JSON Schema document
//! - [`FactGuard`]: every stated fact traces back to the product record
//!
//! [`certify_outputs`] runs both, fail-fast.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod certify;
pub mod error;
pub mod fact_guard;
pub mod schema;

pub use certify::{certify_outputs, ValidationReport};
pub use error::CertifyError;
pub use fact_guard::FactGuard;
pub use schema::SchemaValidator;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
