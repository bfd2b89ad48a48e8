//! Path reconstruction utilities for graph traversal

use crate::graph::{GraphProvider, Vertex};
use std::collections::{HashMap, HashSet, VecDeque};

/// Walk a predecessor map back from `to` until `from` is reached.
///
/// Returns `None` if the chain breaks before reaching `from`.
pub(crate) fn reconstruct_path<V: Vertex>(
    from: &V,
    to: &V,
    predecessors: &HashMap<V, V>,
) -> Option<Vec<V>> {
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        current = predecessors.get(current)?;
        path.push(current.clone());
    }

    path.reverse();
    Some(path)
}

/// Fewest-hop path from `from` to `to`, inclusive of both endpoints.
///
/// Returns `None` when either vertex is absent or `to` is unreachable.
#[tracing::instrument(skip(graph), fields(from = ?from, to = ?to))]
pub fn bfs_find_path<G>(graph: &G, from: &G::Vertex, to: &G::Vertex) -> Option<Vec<G::Vertex>>
where
    G: GraphProvider + ?Sized,
{
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return None;
    }
    if from == to {
        return Some(vec![from.clone()]);
    }

    let mut visited: HashSet<G::Vertex> = HashSet::new();
    let mut predecessors: HashMap<G::Vertex, G::Vertex> = HashMap::new();
    let mut queue: VecDeque<G::Vertex> = VecDeque::new();

    visited.insert(from.clone());
    queue.push_back(from.clone());

    while let Some(current) = queue.pop_front() {
        for edge in graph.outbound_edges(&current) {
            if !visited.insert(edge.target.clone()) {
                continue;
            }
            predecessors.insert(edge.target.clone(), current.clone());
            if &edge.target == to {
                tracing::debug!(visited = visited.len(), "path found");
                return reconstruct_path(from, to, &predecessors);
            }
            queue.push_back(edge.target.clone());
        }
    }

    tracing::debug!(visited = visited.len(), "no path");
    None
}
