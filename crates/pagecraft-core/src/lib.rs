//! pagecraft core
//!
//! Wires the stage crates into one generate-then-certify run:
//!
//! - [`PipelineConfig`]: output and schema locations
//! - [`PipelineContext`]: the state passed node to node
//! - [`serializer`]: schema-strict, atomic artifact writes
//! - [`pipeline`]: the standard task graph and [`run_pipeline`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pagecraft_core::{run_pipeline, PipelineConfig};
//! use pagecraft_product::RawProductInput;
//!
//! let raw = RawProductInput::from_path("data/product_input.json")?;
//! let ctx = run_pipeline(raw, &PipelineConfig::default())?;
//! assert!(ctx.summary().validated);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod serializer;

pub use config::PipelineConfig;
pub use context::{ContextSummary, PipelineContext};
pub use error::{ConfigError, PipelineError};
pub use pipeline::{build_pipeline, nodes, run_pipeline, PipelineGraph};
pub use serializer::{write_artifact, ArtifactRecord, PersistedArtifact};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
