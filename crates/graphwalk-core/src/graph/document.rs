//! On-disk graph documents
//!
//! A document lists vertices and weighted edges with string identifiers. JSON
//! is used for `.json` files and TOML for everything else:
//!
//! ```toml
//! vertices = ["A", "B", "C"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 4
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::store::Graph;

/// Serialized edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    /// Defaults to 1 so unweighted documents can omit it
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

/// Serialized graph
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Vertices declared up front, including isolated ones
    #[serde(default)]
    pub vertices: Vec<String>,

    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

impl GraphDocument {
    /// Load a document, choosing the parser from the file extension
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let document = if is_json(path) {
            serde_json::from_str(&content).map_err(|e| GraphError::invalid_document(path, e))?
        } else {
            toml::from_str(&content).map_err(|e| GraphError::invalid_document(path, e))?
        };
        tracing::debug!(path = %path.display(), "graph document loaded");
        Ok(document)
    }

    /// Build the graph.
    ///
    /// With `implicit_vertices`, edge endpoints are added as needed. Without
    /// it, every endpoint must appear in `vertices` or the build fails with
    /// `UnknownVertexReference`. Weights must be finite (`InvalidWeight`).
    pub fn to_graph(&self, implicit_vertices: bool) -> Result<Graph<String, f64>> {
        let mut graph = Graph::with_capacity(self.vertices.len());
        for vertex in &self.vertices {
            graph.add_vertex(vertex.clone());
        }

        for edge in &self.edges {
            // TOML accepts inf and nan literals
            if !edge.weight.is_finite() {
                return Err(GraphError::invalid_weight(
                    &edge.from,
                    &edge.to,
                    edge.weight,
                ));
            }
            if implicit_vertices {
                graph.add_edge(edge.from.clone(), edge.to.clone(), edge.weight);
            } else {
                graph.insert_edge(&edge.from, edge.to.clone(), edge.weight)?;
            }
        }

        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            implicit_vertices,
            "graph built"
        );
        Ok(graph)
    }
}
