use crate::graph::types::{Traversal, TraversalOptions, TruncationReason, Visit};
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Per-call state shared by the breadth-first and depth-first walkers.
///
/// Created fresh for every invocation and dropped once the result is built.
pub(crate) struct TraversalState<V> {
    pub visited: HashSet<V>,
    pub visits: Vec<Visit<V>>,
    truncated: bool,
    truncation_reason: Option<TruncationReason>,
}

impl<V: crate::graph::Vertex> TraversalState<V> {
    pub fn new() -> Self {
        Self {
            visited: HashSet::new(),
            visits: Vec::new(),
            truncated: false,
            truncation_reason: None,
        }
    }

    /// Mark `vertex` visited and emit it at `depth`
    pub fn record(&mut self, vertex: V, depth: usize) {
        self.visited.insert(vertex.clone());
        self.visits.push(Visit { vertex, depth });
    }

    /// Return false (and flag truncation) once `max_nodes` vertices are discovered
    pub fn check_node_limit(&mut self, opts: &TraversalOptions) -> bool {
        if let Some(max) = opts.max_nodes {
            if self.visited.len() >= max {
                set_truncation(
                    &mut self.truncated,
                    &mut self.truncation_reason,
                    TruncationReason::MaxNodes,
                );
                return false;
            }
        }
        true
    }

    /// Return true if `vertex` sits at `max_depth` and must not be expanded
    pub fn at_depth_limit<G>(
        &mut self,
        graph: &G,
        vertex: &V,
        depth: usize,
        opts: &TraversalOptions,
    ) -> bool
    where
        G: GraphProvider<Vertex = V> + ?Sized,
    {
        match opts.max_depth {
            Some(max) if depth >= max => {
                if has_unexpanded_neighbors(graph, vertex, &self.visited) {
                    set_truncation_if_unset(
                        &mut self.truncated,
                        &mut self.truncation_reason,
                        TruncationReason::MaxDepth,
                    );
                }
                true
            }
            _ => false,
        }
    }

    pub fn into_traversal(self) -> Traversal<V> {
        Traversal {
            visits: self.visits,
            truncated: self.truncated,
            truncation_reason: self.truncation_reason,
        }
    }
}

/// Check if `vertex` has an outgoing edge to a vertex not yet visited
pub(crate) fn has_unexpanded_neighbors<G>(
    graph: &G,
    vertex: &G::Vertex,
    visited: &HashSet<G::Vertex>,
) -> bool
where
    G: GraphProvider + ?Sized,
{
    graph
        .outbound_edges(vertex)
        .iter()
        .any(|e| !visited.contains(&e.target))
}

pub(crate) fn set_truncation(
    truncated: &mut bool,
    truncation_reason: &mut Option<TruncationReason>,
    reason: TruncationReason,
) {
    *truncated = true;
    *truncation_reason = Some(reason);
}

pub(crate) fn set_truncation_if_unset(
    truncated: &mut bool,
    truncation_reason: &mut Option<TruncationReason>,
    reason: TruncationReason,
) {
    if !*truncated {
        set_truncation(truncated, truncation_reason, reason);
    }
}
