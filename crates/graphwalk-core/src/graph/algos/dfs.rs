use crate::graph::algos::shared::TraversalState;
use crate::graph::types::{DfsMode, Traversal, TraversalOptions};
use crate::graph::GraphProvider;

/// Depth-first discovery order from `start` using an explicit stack.
///
/// Produces the same order as [`dfs_recursive`] without touching the call
/// stack, so it is safe on arbitrarily deep graphs.
pub fn dfs<G>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex>
where
    G: GraphProvider + ?Sized,
{
    dfs_traverse(graph, start, DfsMode::Iterative, &TraversalOptions::default()).into_order()
}

/// Depth-first discovery order from `start` using recursion.
///
/// Recursion depth equals the longest simple path explored; prefer [`dfs`]
/// unless the graph depth is known to be small.
pub fn dfs_recursive<G>(graph: &G, start: &G::Vertex) -> Vec<G::Vertex>
where
    G: GraphProvider + ?Sized,
{
    dfs_traverse(graph, start, DfsMode::Recursive, &TraversalOptions::default()).into_order()
}

/// Depth-first traversal bounded by `opts`.
///
/// Each visit's depth is its depth in the depth-first tree, which may exceed
/// its hop distance from `start`.
#[tracing::instrument(skip(graph, opts), fields(start = ?start, mode = ?mode, max_depth = ?opts.max_depth, max_nodes = ?opts.max_nodes))]
pub fn dfs_traverse<G>(
    graph: &G,
    start: &G::Vertex,
    mode: DfsMode,
    opts: &TraversalOptions,
) -> Traversal<G::Vertex>
where
    G: GraphProvider + ?Sized,
{
    if !graph.contains_vertex(start) {
        tracing::debug!("start vertex not in graph");
        return Traversal::empty();
    }

    let mut state = TraversalState::new();
    match mode {
        DfsMode::Iterative => walk_iterative(graph, start, &mut state, opts),
        DfsMode::Recursive => {
            if state.check_node_limit(opts) {
                walk_recursive(graph, start, 0, &mut state, opts);
            }
        }
    }

    let traversal = state.into_traversal();
    tracing::debug!(
        visited = traversal.len(),
        truncated = traversal.truncated,
        "dfs complete"
    );
    traversal
}

fn walk_iterative<G>(
    graph: &G,
    start: &G::Vertex,
    state: &mut TraversalState<G::Vertex>,
    opts: &TraversalOptions,
) where
    G: GraphProvider + ?Sized,
{
    let mut stack: Vec<(G::Vertex, usize)> = vec![(start.clone(), 0)];

    while let Some((current, depth)) = stack.pop() {
        // A vertex can be pushed once per incoming edge; only the first pop counts
        if state.visited.contains(&current) {
            continue;
        }
        if !state.check_node_limit(opts) {
            break;
        }
        state.record(current.clone(), depth);

        if state.at_depth_limit(graph, &current, depth, opts) {
            continue;
        }

        // Reverse push so the first neighbor is popped first, matching recursion
        for edge in graph.outbound_edges(&current).iter().rev() {
            if !state.visited.contains(&edge.target) {
                stack.push((edge.target.clone(), depth + 1));
            }
        }
    }
}

fn walk_recursive<G>(
    graph: &G,
    current: &G::Vertex,
    depth: usize,
    state: &mut TraversalState<G::Vertex>,
    opts: &TraversalOptions,
) where
    G: GraphProvider + ?Sized,
{
    state.record(current.clone(), depth);

    if state.at_depth_limit(graph, current, depth, opts) {
        return;
    }

    for edge in graph.outbound_edges(current) {
        if state.visited.contains(&edge.target) {
            continue;
        }
        if !state.check_node_limit(opts) {
            return;
        }
        walk_recursive(graph, &edge.target, depth + 1, state, opts);
    }
}
