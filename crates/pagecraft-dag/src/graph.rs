use crate::error::{GraphError, RunError};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::fmt;

/// Stable string identifier of a node
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl NodeId {
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A unit of work in the graph
///
/// A node consumes the shared context and hands it back, possibly mutated.
/// Closures of the shape `Fn(C) -> Result<C, E>` are nodes.
pub trait TaskNode<C, E> {
    /// Execute against the context
    ///
    /// # Errors
    /// Any error aborts the whole run.
    fn run(&self, ctx: C) -> Result<C, E>;
}

impl<C, E, F> TaskNode<C, E> for F
where
    F: Fn(C) -> Result<C, E>,
{
    fn run(&self, ctx: C) -> Result<C, E> {
        self(ctx)
    }
}

struct NodeEntry<C, E> {
    node: Box<dyn TaskNode<C, E>>,
    depends_on: Vec<NodeId>,
}

/// Dependency-ordered task graph
///
/// Nodes run one at a time, to completion, in the order computed by
/// [`TaskGraph::execution_order`]. Among nodes that are ready at the same
/// step, the one registered first runs first.
pub struct TaskGraph<C, E> {
    nodes: IndexMap<NodeId, NodeEntry<C, E>>,
}

impl<C, E> TaskGraph<C, E> {
    /// Create an empty graph
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
        }
    }

    /// Register a node and the ids it depends on
    ///
    /// Dependencies may be registered later; they are resolved when the
    /// graph is scheduled.
    ///
    /// # Errors
    /// [`GraphError::DuplicateNode`] if `node_id` is already registered.
    pub fn register<N, I, D>(
        &mut self,
        node_id: impl Into<NodeId>,
        node: N,
        depends_on: I,
    ) -> Result<(), GraphError>
    where
        N: TaskNode<C, E> + 'static,
        I: IntoIterator<Item = D>,
        D: Into<NodeId>,
    {
        let node_id = node_id.into();
        if self.nodes.contains_key(&node_id) {
            return Err(GraphError::DuplicateNode(node_id));
        }

        let mut deps: Vec<NodeId> = Vec::new();
        for dep in depends_on {
            let dep = dep.into();
            if !deps.contains(&dep) {
                deps.push(dep);
            }
        }

        tracing::debug!(node = %node_id, deps = deps.len(), "registered node");
        self.nodes.insert(
            node_id,
            NodeEntry {
                node: Box::new(node),
                depends_on: deps,
            },
        );
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, node_id: &str) -> bool {
        self.nodes.contains_key(&NodeId::new(node_id))
    }

    /// Declared dependencies of a node, in declaration order
    #[must_use]
    pub fn dependencies(&self, node_id: &str) -> Option<&[NodeId]> {
        self.nodes
            .get(&NodeId::new(node_id))
            .map(|entry| entry.depends_on.as_slice())
    }

    /// Registered node ids, in registration order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.keys()
    }

    /// Compute the execution order (Kahn's algorithm)
    ///
    /// # Errors
    /// - [`GraphError::MissingDependency`] for a reference to an unknown node
    /// - [`GraphError::CycleDetected`] if not every node can be ordered
    pub fn execution_order(&self) -> Result<Vec<NodeId>, GraphError> {
        let count = self.nodes.len();
        let mut in_degree = vec![0usize; count];
        let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); count];

        for (idx, (node_id, entry)) in self.nodes.iter().enumerate() {
            for dep in &entry.depends_on {
                let dep_idx =
                    self.nodes
                        .get_index_of(dep)
                        .ok_or_else(|| GraphError::MissingDependency {
                            node: node_id.clone(),
                            dependency: dep.clone(),
                        })?;
                dependents[dep_idx].push(idx);
                in_degree[idx] += 1;
            }
        }

        // Ready set keyed by registration index: lowest index is scheduled first.
        let mut ready: BTreeSet<usize> = (0..count).filter(|&i| in_degree[i] == 0).collect();
        let mut order: Vec<usize> = Vec::with_capacity(count);

        while let Some(idx) = ready.pop_first() {
            order.push(idx);
            for &next in &dependents[idx] {
                in_degree[next] -= 1;
                if in_degree[next] == 0 {
                    ready.insert(next);
                }
            }
        }

        let ids: Vec<&NodeId> = self.nodes.keys().collect();
        if order.len() != count {
            let unresolved = (0..count)
                .filter(|&i| in_degree[i] > 0)
                .map(|i| ids[i].clone())
                .collect();
            return Err(GraphError::CycleDetected { unresolved });
        }

        Ok(order.into_iter().map(|i| ids[i].clone()).collect())
    }

    /// Run every node in execution order, threading the context through
    ///
    /// # Errors
    /// - [`RunError::Graph`] if scheduling fails (nothing runs)
    /// - [`RunError::NodeFailed`] for the first node that fails
    pub fn run(&self, initial: C) -> Result<C, RunError<E>> {
        let order = self.execution_order()?;
        tracing::info!(
            "DAG execution order: [{}]",
            order
                .iter()
                .map(NodeId::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );

        let mut ctx = initial;
        for (position, node_id) in order.iter().enumerate() {
            let Some(entry) = self.nodes.get(node_id) else {
                continue;
            };
            tracing::info!(node = %node_id, position, "running node");
            ctx = entry.node.run(ctx).map_err(|source| {
                tracing::error!(node = %node_id, "node failed");
                RunError::NodeFailed {
                    node: node_id.clone(),
                    source,
                }
            })?;
            tracing::debug!(node = %node_id, "node finished");
        }

        Ok(ctx)
    }
}

impl<C, E> Default for TaskGraph<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E> fmt::Debug for TaskGraph<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.nodes
                    .iter()
                    .map(|(id, entry)| (id.as_str(), &entry.depends_on)),
            )
            .finish()
    }
}
