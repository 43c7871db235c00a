//! Error types for content assembly
//!
//! Provides error handling for:
//! - Template spec construction (hints, block references)
//! - Block evaluation
//! - Page assembly prerequisites

use crate::template::TemplateInput;

/// Template spec construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// Rendering hint is not one of raw, bullet, paragraph
    #[error("invalid format '{hint}' for field '{field}'; allowed: bullet, paragraph, raw")]
    UnknownHint { field: String, hint: String },

    /// Field references a block id that is not registered
    #[error("template '{template}' field '{field}' references unknown block '{block}'")]
    UnknownBlock {
        template: String,
        field: String,
        block: String,
    },

    /// Two fields share a name
    #[error("template '{template}' declares field '{field}' twice")]
    DuplicateField { template: String, field: String },

    /// Template id is blank
    #[error("template id must not be empty")]
    EmptyTemplateId,
}

/// Block evaluation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    /// No block registered under this id
    #[error("unknown block '{0}'")]
    Unknown(String),

    /// Pair block evaluated without a counterpart
    #[error("block '{0}' requires the comparison counterpart")]
    MissingCounterpart(String),
}

/// Page assembly errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssemblyError {
    /// A required upstream input is absent; the pipeline is miswired
    #[error("template '{template}' requires {missing}, which has not been produced")]
    Prerequisite {
        template: String,
        missing: TemplateInput,
    },

    /// Template spec is invalid
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Block evaluation failed
    #[error("block error: {0}")]
    Block(#[from] BlockError),
}
