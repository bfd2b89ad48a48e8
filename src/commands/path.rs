//! Path command
use std::path::Path;

use graphwalk_core::error::Result;
use graphwalk_core::format::{escape_quotes, OutputFormat};
use graphwalk_core::graph::{bfs_find_path, dijkstra_path};

use super::{load_graph, print_json, require_vertex, RunContext};

/// Execute the path command
///
/// Unweighted mode finds the fewest-hop path; weighted mode the cheapest.
pub fn execute(
    ctx: &RunContext,
    graph_path: &Path,
    from: &str,
    to: &str,
    weighted: bool,
) -> Result<()> {
    let graph = load_graph(ctx, graph_path)?;
    let from = require_vertex(&graph, from)?;
    let to = require_vertex(&graph, to)?;

    let (path, weight) = if weighted {
        match dijkstra_path(&graph, &from, &to)? {
            Some((weight, path)) => (Some(path), Some(weight)),
            None => (None, None),
        }
    } else {
        (bfs_find_path(&graph, &from, &to), None)
    };

    let hops = path.as_ref().map(|p| p.len().saturating_sub(1));

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "from": from,
            "to": to,
            "weighted": weighted,
            "found": path.is_some(),
            "path": path,
            "hops": hops,
            "weight": weight,
        }))?,
        OutputFormat::Human => match (&path, hops) {
            (Some(path), Some(hops)) => {
                println!("{}", path.join(" -> "));
                if !ctx.quiet {
                    println!();
                    let unit = if hops == 1 { "hop" } else { "hops" };
                    println!("Path length: {} {}", hops, unit);
                    if let Some(weight) = weight {
                        println!("Total weight: {}", weight);
                    }
                }
            }
            _ => {
                if !ctx.quiet {
                    println!("No path found from {} to {}", from, to);
                }
            }
        },
        OutputFormat::Records => {
            println!(
                "H graphwalk=1 records=1 mode=path from=\"{}\" to=\"{}\" found={} hops={}",
                escape_quotes(&from),
                escape_quotes(&to),
                path.is_some(),
                hops.map(|h| h.to_string()).unwrap_or_else(|| "-".to_string())
            );
            if let Some(weight) = weight {
                println!("W {}", weight);
            }
            for vertex in path.iter().flatten() {
                println!("P \"{}\"", escape_quotes(vertex));
            }
        }
    }

    Ok(())
}
