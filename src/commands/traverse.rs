//! BFS and DFS commands
use std::path::Path;

use graphwalk_core::error::Result;
use graphwalk_core::format::{escape_quotes, OutputFormat};
use graphwalk_core::graph::{bfs_traverse, dfs_traverse, DfsMode, Traversal, TraversalOptions};

use super::{load_graph, print_json, require_vertex, RunContext};

/// Execute the bfs command
pub fn execute_bfs(
    ctx: &RunContext,
    graph_path: &Path,
    start: &str,
    opts: &TraversalOptions,
) -> Result<()> {
    let graph = load_graph(ctx, graph_path)?;
    let start = require_vertex(&graph, start)?;

    let traversal = bfs_traverse(&graph, &start, opts);
    output_traversal(ctx, "bfs", &start, &traversal)
}

/// Execute the dfs command
pub fn execute_dfs(
    ctx: &RunContext,
    graph_path: &Path,
    start: &str,
    mode: DfsMode,
    opts: &TraversalOptions,
) -> Result<()> {
    let graph = load_graph(ctx, graph_path)?;
    let start = require_vertex(&graph, start)?;

    let traversal = dfs_traverse(&graph, &start, mode, opts);
    output_traversal(ctx, "dfs", &start, &traversal)
}

fn output_traversal(
    ctx: &RunContext,
    algorithm: &str,
    start: &str,
    traversal: &Traversal<String>,
) -> Result<()> {
    let reason = traversal.truncation_reason.map(|r| r.as_str());

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "algorithm": algorithm,
            "start": start,
            "order": traversal.order(),
            "visits": traversal.visits,
            "truncated": traversal.truncated,
            "truncation_reason": reason,
        }))?,
        OutputFormat::Human => {
            // Indent by depth so the discovery tree is visible
            for visit in &traversal.visits {
                println!("{}{}", "  ".repeat(visit.depth), visit.vertex);
            }
            if !ctx.quiet {
                println!();
                println!("Visited: {}", traversal.len());
                if let Some(reason) = reason {
                    println!("Truncated: {}", reason);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H graphwalk=1 records=1 mode={} start=\"{}\" visited={} truncated={}",
                algorithm,
                escape_quotes(start),
                traversal.len(),
                reason.unwrap_or("false")
            );
            for visit in &traversal.visits {
                println!("V \"{}\" depth={}", escape_quotes(&visit.vertex), visit.depth);
            }
        }
    }

    Ok(())
}
