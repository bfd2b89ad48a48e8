//! Command implementations for graphwalk

pub mod dispatch;
pub mod info;
pub mod path;
pub mod shortest;
pub mod traverse;

use std::path::Path;
use std::time::Instant;

use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::{Graph, GraphDocument};

/// Settings resolved once per invocation and shared by every command
#[derive(Debug)]
pub struct RunContext {
    pub config: GraphwalkConfig,
    pub format: OutputFormat,
    pub quiet: bool,
}

/// Load a graph document and build the graph per the config
pub fn load_graph(ctx: &RunContext, path: &Path) -> Result<Graph<String, f64>> {
    let start = Instant::now();
    let document = GraphDocument::load(path)?;
    let graph = document.to_graph(ctx.config.graph.implicit_vertices)?;
    graphwalk_core::trace_time!(start, "load_graph", vertices = graph.vertex_count());
    Ok(graph)
}

/// Fail with `VertexNotFound` when `id` is not in the graph
pub fn require_vertex(graph: &Graph<String, f64>, id: &str) -> Result<String> {
    let id = id.to_string();
    if !graph.contains_vertex(&id) {
        return Err(GraphError::VertexNotFound { id });
    }
    Ok(id)
}

/// Print a JSON value to stdout
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
