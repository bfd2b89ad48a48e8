use serde::{Deserialize, Serialize};

/// Directed, weighted outgoing edge as stored in an adjacency list.
///
/// The source vertex is implied by the adjacency list that owns the edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V, W> {
    pub target: V,
    pub weight: W,
}

impl<V, W: Copy> Edge<V, W> {
    pub fn new(target: V, weight: W) -> Self {
        Edge { target, weight }
    }

    /// Borrow as a `(target, weight)` pair
    pub fn as_pair(&self) -> (&V, W) {
        (&self.target, self.weight)
    }
}

/// Which depth-first form to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DfsMode {
    /// Explicit stack; safe on deep graphs
    #[default]
    Iterative,
    /// Call stack; only for graphs of bounded depth
    Recursive,
}

impl std::str::FromStr for DfsMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "iterative" => Ok(DfsMode::Iterative),
            "recursive" => Ok(DfsMode::Recursive),
            other => Err(format!(
                "unknown dfs mode '{}' (expected: iterative, recursive)",
                other
            )),
        }
    }
}

/// Limits for bounded traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalOptions {
    /// Do not expand vertices at this hop depth or beyond
    pub max_depth: Option<usize>,
    /// Stop after this many vertices have been discovered
    pub max_nodes: Option<usize>,
}

/// Reason a bounded traversal stopped early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncationReason {
    MaxDepth,
    MaxNodes,
}

impl TruncationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruncationReason::MaxDepth => "max_depth",
            TruncationReason::MaxNodes => "max_nodes",
        }
    }
}

/// A vertex in discovery order with its hop depth from the start
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Visit<V> {
    pub vertex: V,
    pub depth: usize,
}

/// Complete result of a bounded traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Traversal<V> {
    pub visits: Vec<Visit<V>>,
    pub truncated: bool,
    pub truncation_reason: Option<TruncationReason>,
}

impl<V> Traversal<V> {
    pub(crate) fn empty() -> Self {
        Traversal {
            visits: Vec::new(),
            truncated: false,
            truncation_reason: None,
        }
    }

    /// Discovery order without depth information
    pub fn order(&self) -> Vec<&V> {
        self.visits.iter().map(|v| &v.vertex).collect()
    }

    pub fn into_order(self) -> Vec<V> {
        self.visits.into_iter().map(|v| v.vertex).collect()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}
