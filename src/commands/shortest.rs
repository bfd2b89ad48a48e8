//! Dijkstra command
use std::path::Path;

use graphwalk_core::error::Result;
use graphwalk_core::format::{escape_quotes, OutputFormat};
use graphwalk_core::graph::dijkstra_paths;

use super::{load_graph, print_json, require_vertex, RunContext};

/// Printed in place of a distance for vertices the source cannot reach
const UNREACHABLE: &str = "unreachable";

/// Execute the dijkstra command
pub fn execute(
    ctx: &RunContext,
    graph_path: &Path,
    source: &str,
    include_unreachable: bool,
) -> Result<()> {
    let graph = load_graph(ctx, graph_path)?;
    let source = require_vertex(&graph, source)?;

    let paths = dijkstra_paths(&graph, &source)?;

    let reachable: Vec<(&String, f64)> = paths.iter().collect();
    let unreachable: Vec<&String> = if include_unreachable {
        graph.vertices().filter(|v| !paths.is_reachable(v)).collect()
    } else {
        Vec::new()
    };

    match ctx.format {
        OutputFormat::Json => {
            let mut distances: Vec<serde_json::Value> = reachable
                .iter()
                .map(|(vertex, distance)| {
                    serde_json::json!({ "vertex": vertex, "distance": distance })
                })
                .collect();
            distances.extend(
                unreachable
                    .iter()
                    .map(|vertex| serde_json::json!({ "vertex": vertex, "distance": null })),
            );
            print_json(&serde_json::json!({
                "source": source,
                "reachable": reachable.len(),
                "distances": distances,
            }))?;
        }
        OutputFormat::Human => {
            for (vertex, distance) in &reachable {
                println!("{}\t{}", vertex, distance);
            }
            for vertex in &unreachable {
                println!("{}\t{}", vertex, UNREACHABLE);
            }
            if !ctx.quiet {
                println!();
                println!("Reachable: {} of {}", reachable.len(), graph.vertex_count());
            }
        }
        OutputFormat::Records => {
            println!(
                "H graphwalk=1 records=1 mode=dijkstra source=\"{}\" reachable={}",
                escape_quotes(&source),
                reachable.len()
            );
            for (vertex, distance) in &reachable {
                println!("D \"{}\" {}", escape_quotes(vertex), distance);
            }
            for vertex in &unreachable {
                println!("D \"{}\" {}", escape_quotes(vertex), UNREACHABLE);
            }
        }
    }

    Ok(())
}
