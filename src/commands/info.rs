//! Info command
use std::path::Path;

use graphwalk_core::error::Result;
use graphwalk_core::format::OutputFormat;

use super::{load_graph, print_json, RunContext};

/// Execute the info command
pub fn execute(ctx: &RunContext, graph_path: &Path) -> Result<()> {
    let graph = load_graph(ctx, graph_path)?;

    let negative_edges = graph.edges().filter(|(_, _, w)| *w < 0.0).count();
    let sinks = graph.vertices().filter(|v| graph.out_degree(v) == 0).count();

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "sinks": sinks,
            "negative_edges": negative_edges,
        }))?,
        OutputFormat::Human => {
            println!("Vertices: {}", graph.vertex_count());
            println!("Edges: {}", graph.edge_count());
            println!("Sinks: {}", sinks);
            if negative_edges > 0 {
                println!(
                    "Negative edges: {} (dijkstra will reject them when reachable)",
                    negative_edges
                );
            }
        }
        OutputFormat::Records => {
            println!(
                "H graphwalk=1 records=1 mode=info vertices={} edges={} sinks={} negative_edges={}",
                graph.vertex_count(),
                graph.edge_count(),
                sinks,
                negative_edges
            );
        }
    }

    Ok(())
}
