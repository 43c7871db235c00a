//! pagecraft task graph
//!
//! A small, single-threaded DAG executor. Nodes are registered with the ids
//! they depend on, scheduled with Kahn's algorithm, and run strictly one after
//! another, each taking ownership of the shared context and returning it.
//!
//! # Example
//!
//! ```rust
//! use pagecraft_dag::TaskGraph;
//!
//! type Trail = Vec<&'static str>;
//!
//! fn parse(mut trail: Trail) -> Result<Trail, String> {
//!     trail.push("parse");
//!     Ok(trail)
//! }
//!
//! fn render(mut trail: Trail) -> Result<Trail, String> {
//!     trail.push("render");
//!     Ok(trail)
//! }
//!
//! let mut graph: TaskGraph<Trail, String> = TaskGraph::new();
//! graph.register("render", render, ["parse"])?;
//! graph.register("parse", parse, Vec::<&str>::new())?;
//!
//! let trail = graph.run(Vec::new()).unwrap();
//! assert_eq!(trail, ["parse", "render"]);
//! # Ok::<(), pagecraft_dag::GraphError>(())
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod graph;

pub use error::{GraphError, RunError};
pub use graph::{NodeId, TaskGraph, TaskNode};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
