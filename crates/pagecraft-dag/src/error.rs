//! Error types for the task graph
//!
//! Scheduling errors ([`GraphError`]) are raised before any node runs.
//! Execution errors ([`RunError`]) wrap the first node failure.

use crate::graph::NodeId;

/// Graph construction and scheduling errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A node with this id is already registered
    #[error("node '{0}' already registered")]
    DuplicateNode(NodeId),

    /// A node depends on an id that was never registered
    #[error("dependency '{dependency}' not found for node '{node}'")]
    MissingDependency {
        /// Node declaring the dependency
        node: NodeId,
        /// The unregistered dependency
        dependency: NodeId,
    },

    /// Kahn's algorithm could not order every node
    #[error("cycle detected; unordered nodes: {}", format_ids(.unresolved))]
    CycleDetected {
        /// Nodes whose in-degree never reached zero
        unresolved: Vec<NodeId>,
    },
}

/// Errors raised by [`TaskGraph::run`](crate::TaskGraph::run)
#[derive(Debug, thiserror::Error)]
pub enum RunError<E> {
    /// Scheduling failed; no node was executed
    #[error("graph error: {0}")]
    Graph(#[from] GraphError),

    /// A node returned an error; later nodes were not executed
    #[error("node '{node}' failed: {source}")]
    NodeFailed {
        /// The failing node
        node: NodeId,
        /// Error returned by the node
        #[source]
        source: E,
    },
}

impl<E> RunError<E> {
    /// Id of the failing node, if the failure happened during execution
    #[inline]
    #[must_use]
    pub fn failed_node(&self) -> Option<&NodeId> {
        match self {
            Self::NodeFailed { node, .. } => Some(node),
            Self::Graph(_) => None,
        }
    }

    /// Unwrap the node error, if any
    #[must_use]
    pub fn into_node_error(self) -> Option<E> {
        match self {
            Self::NodeFailed { source, .. } => Some(source),
            Self::Graph(_) => None,
        }
    }
}

fn format_ids(ids: &[NodeId]) -> String {
    ids.iter()
        .map(NodeId::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
