//! pagecraft command-line runner
//!
//! The binary is a thin wrapper over [`runner::execute`]; the logic lives
//! here so it can be tested without spawning a process.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod runner;
pub mod status;

pub use runner::{execute, resolve_config, RunRequest};
pub use status::RunStatus;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
