//! Adjacency-list graph store
//!
//! Vertices and their outgoing edge lists live in an insertion-ordered map, so
//! iteration order (and therefore every traversal built on it) is a pure
//! function of the construction sequence.

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::graph::types::Edge;
use crate::graph::weight::{Vertex, Weight};

/// Directed, weighted multigraph
#[derive(Debug, Clone)]
pub struct Graph<V, W = u64> {
    adjacency: IndexMap<V, Vec<Edge<V, W>>>,
    edge_count: usize,
}

impl<V: Vertex, W: Weight> Default for Graph<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex, W: Weight> Graph<V, W> {
    pub fn new() -> Self {
        Graph {
            adjacency: IndexMap::new(),
            edge_count: 0,
        }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Graph {
            adjacency: IndexMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Build a graph from `(from, to, weight)` triples, adding endpoints as needed
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Insert a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, id: V) -> bool {
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Insert a directed edge, adding either endpoint if absent.
    ///
    /// Parallel edges are kept. Weight sign is not checked here; shortest-path
    /// search rejects negative weights when it reaches them.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) {
        let edge = Edge::new(to.clone(), weight);
        self.adjacency.entry(from).or_default().push(edge);
        self.add_vertex(to);
        self.edge_count += 1;
    }

    /// Insert a directed edge between two existing vertices.
    ///
    /// Unlike [`Graph::add_edge`], this never adds vertices and fails with
    /// `UnknownVertexReference` when an endpoint is missing.
    pub fn insert_edge(&mut self, from: &V, to: V, weight: W) -> Result<()> {
        if !self.adjacency.contains_key(&to) {
            return Err(GraphError::unknown_vertex(&to));
        }
        let Some(edges) = self.adjacency.get_mut(from) else {
            return Err(GraphError::unknown_vertex(from));
        };
        edges.push(Edge::new(to, weight));
        self.edge_count += 1;
        Ok(())
    }

    /// Outgoing edges of `id` in insertion order; empty for unknown vertices
    pub fn neighbors(&self, id: &V) -> &[Edge<V, W>] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_vertex(&self, id: &V) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn out_degree(&self, id: &V) -> usize {
        self.neighbors(id).len()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Vertices in insertion order
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// All edges as `(from, to, weight)`, grouped by source in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, &e.target, e.weight)))
    }
}
