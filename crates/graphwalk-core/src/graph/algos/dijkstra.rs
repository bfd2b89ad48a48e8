use crate::error::{GraphError, Result};
use crate::graph::algos::path::reconstruct_path;
use crate::graph::{GraphProvider, Vertex, Weight};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance).
///
/// Equal distances fall back to push order, so ties pop deterministically.
#[derive(Debug, Clone)]
pub struct HeapEntry<V, W> {
    pub vertex: V,
    pub distance: W,
    pub sequence: u64,
}

impl<V, W: Weight> PartialEq for HeapEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, W: Weight> Eq for HeapEntry<V, W> {}

impl<V, W: Weight> PartialOrd for HeapEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Weight> Ord for HeapEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Non-comparable weights are rejected before they reach the heap
        self.distance
            .partial_cmp(&other.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Work done by one search; both counters are bounded by the edge count
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SearchStats {
    pub relaxations: usize,
    pub stale_skipped: usize,
}

/// Result of a single-source shortest-path search.
///
/// Only vertices reachable from the source have entries; an unreachable or
/// unknown vertex yields `None` from [`ShortestPaths::distance`].
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, W> {
    source: V,
    distances: HashMap<V, W>,
    predecessors: HashMap<V, V>,
    settled: Vec<V>,
    stats: SearchStats,
}

impl<V: Vertex, W: Weight> ShortestPaths<V, W> {
    fn new(source: V) -> Self {
        ShortestPaths {
            source,
            distances: HashMap::new(),
            predecessors: HashMap::new(),
            settled: Vec::new(),
            stats: SearchStats::default(),
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Vertices on a shortest path from the source to `target`, inclusive
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }
        reconstruct_path(&self.source, target, &self.predecessors)
    }

    /// Reachable vertices with their distances, in the order they were settled
    /// (non-decreasing distance)
    pub fn iter(&self) -> impl Iterator<Item = (&V, W)> + '_ {
        self.settled
            .iter()
            .filter_map(|v| self.distances.get(v).map(|d| (v, *d)))
    }

    pub fn into_distances(self) -> HashMap<V, W> {
        self.distances
    }

    /// Number of reachable vertices, source included
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub(crate) fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState<V, W> {
    paths: ShortestPaths<V, W>,
    heap: BinaryHeap<Reverse<HeapEntry<V, W>>>,
    next_sequence: u64,
}

impl<V: Vertex, W: Weight> DijkstraState<V, W> {
    fn new(source: V) -> Self {
        Self {
            paths: ShortestPaths::new(source),
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    fn push(&mut self, vertex: V, distance: W) {
        self.heap.push(Reverse(HeapEntry {
            vertex,
            distance,
            sequence: self.next_sequence,
        }));
        self.next_sequence += 1;
    }
}

/// Shortest distance from `source` to every reachable vertex.
///
/// Unreachable vertices are omitted from the map. Fails with
/// `NegativeWeight` if any edge reachable from `source` has a weight below
/// zero.
pub fn dijkstra<G>(graph: &G, source: &G::Vertex) -> Result<HashMap<G::Vertex, G::Weight>>
where
    G: GraphProvider + ?Sized,
{
    Ok(dijkstra_paths(graph, source)?.into_distances())
}

/// Cheapest path from `source` to `target` as `(distance, vertices)`.
///
/// The whole reachable region is still validated for negative weights.
pub fn dijkstra_path<G>(
    graph: &G,
    source: &G::Vertex,
    target: &G::Vertex,
) -> Result<Option<(G::Weight, Vec<G::Vertex>)>>
where
    G: GraphProvider + ?Sized,
{
    let paths = dijkstra_paths(graph, source)?;
    Ok(paths
        .distance(target)
        .and_then(|d| paths.path_to(target).map(|p| (d, p))))
}

/// Single-source shortest paths with predecessor tracking.
///
/// Uses a binary heap without decrease-key: improved distances push a fresh
/// entry and outdated entries are skipped when popped. An absent `source`
/// yields an empty result.
#[tracing::instrument(skip(graph), fields(source = ?source))]
pub fn dijkstra_paths<G>(
    graph: &G,
    source: &G::Vertex,
) -> Result<ShortestPaths<G::Vertex, G::Weight>>
where
    G: GraphProvider + ?Sized,
{
    let mut state = DijkstraState::new(source.clone());
    if !graph.contains_vertex(source) {
        tracing::debug!("source vertex not in graph");
        return Ok(state.paths);
    }

    state
        .paths
        .distances
        .insert(source.clone(), <G::Weight as Weight>::ZERO);
    state.push(source.clone(), <G::Weight as Weight>::ZERO);

    while let Some(Reverse(HeapEntry {
        vertex: current,
        distance,
        ..
    })) = state.heap.pop()
    {
        let is_stale = state
            .paths
            .distances
            .get(&current)
            .is_some_and(|best| distance > *best);
        if is_stale {
            state.paths.stats.stale_skipped += 1;
            continue;
        }

        for edge in graph.outbound_edges(&current) {
            if !edge.weight.is_comparable() {
                return Err(GraphError::invalid_weight(
                    &current,
                    &edge.target,
                    edge.weight,
                ));
            }
            if edge.weight.is_negative() {
                tracing::debug!(from = ?current, to = ?edge.target, "negative edge weight");
                return Err(GraphError::negative_weight(
                    &current,
                    &edge.target,
                    edge.weight,
                ));
            }

            let candidate = distance + edge.weight;
            let improves = state
                .paths
                .distances
                .get(&edge.target)
                .is_none_or(|best| candidate < *best);
            if improves {
                state.paths.stats.relaxations += 1;
                state
                    .paths
                    .distances
                    .insert(edge.target.clone(), candidate);
                state
                    .paths
                    .predecessors
                    .insert(edge.target.clone(), current.clone());
                state.push(edge.target.clone(), candidate);
            }
        }

        state.paths.settled.push(current);
    }

    let stats = state.paths.stats();
    tracing::debug!(
        reachable = state.paths.len(),
        relaxations = stats.relaxations,
        stale_skipped = stats.stale_skipped,
        "dijkstra complete"
    );
    Ok(state.paths)
}
