use crate::graph::store::Graph;
use crate::graph::types::Edge;
use crate::graph::weight::{Vertex, Weight};

/// Trait for providing read-only graph adjacency to the algorithms
pub trait GraphProvider {
    type Vertex: Vertex;
    type Weight: Weight;

    fn contains_vertex(&self, id: &Self::Vertex) -> bool;
    fn outbound_edges(&self, id: &Self::Vertex) -> &[Edge<Self::Vertex, Self::Weight>];
}

impl<V: Vertex, W: Weight> GraphProvider for Graph<V, W> {
    type Vertex = V;
    type Weight = W;

    fn contains_vertex(&self, id: &V) -> bool {
        Graph::contains_vertex(self, id)
    }

    fn outbound_edges(&self, id: &V) -> &[Edge<V, W>] {
        self.neighbors(id)
    }
}
