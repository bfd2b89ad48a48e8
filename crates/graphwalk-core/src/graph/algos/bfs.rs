use crate::graph::algos::shared::TraversalState;
use crate::graph::types::{Traversal, TraversalOptions, Visit};
use crate::graph::GraphProvider;
use std::collections::VecDeque;

/// Breadth-first discovery order from `start`.
///
/// Vertices come out in non-decreasing hop distance. Returns an empty
/// sequence when `start` is not in the graph.
pub fn bfs<G>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex>
where
    G: GraphProvider + ?Sized,
{
    bfs_traverse(graph, start, &TraversalOptions::default()).into_order()
}

/// Breadth-first traversal bounded by `opts`.
///
/// Each visit carries its hop distance from `start`.
#[tracing::instrument(skip(graph, opts), fields(start = ?start, max_depth = ?opts.max_depth, max_nodes = ?opts.max_nodes))]
pub fn bfs_traverse<G>(graph: &G, start: &G::Vertex, opts: &TraversalOptions) -> Traversal<G::Vertex>
where
    G: GraphProvider + ?Sized,
{
    if !graph.contains_vertex(start) {
        tracing::debug!("start vertex not in graph");
        return Traversal::empty();
    }

    let mut state = TraversalState::new();
    if !state.check_node_limit(opts) {
        return state.into_traversal();
    }

    // Vertices are marked visited on enqueue so each is queued at most once
    let mut queue: VecDeque<(G::Vertex, usize)> = VecDeque::new();
    state.visited.insert(start.clone());
    queue.push_back((start.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        if !state.at_depth_limit(graph, &current, depth, opts) {
            for edge in graph.outbound_edges(&current) {
                if state.visited.contains(&edge.target) {
                    continue;
                }
                if !state.check_node_limit(opts) {
                    break;
                }
                state.visited.insert(edge.target.clone());
                queue.push_back((edge.target.clone(), depth + 1));
            }
        }

        state.visits.push(Visit {
            vertex: current,
            depth,
        });
    }

    let traversal = state.into_traversal();
    tracing::debug!(
        visited = traversal.len(),
        truncated = traversal.truncated,
        "bfs complete"
    );
    traversal
}
