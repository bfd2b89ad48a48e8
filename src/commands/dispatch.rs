//! Command dispatch logic for graphwalk
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use graphwalk_core::config::GraphwalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::graph::DfsMode;

use crate::cli::{Cli, Commands};
use crate::commands::{info, path, shortest, traverse, RunContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = GraphwalkConfig::resolve(cli.config.as_ref(), &cwd)?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "load_config");
    }

    let ctx = RunContext {
        format: cli.format.unwrap_or(config.output.format),
        quiet: cli.quiet,
        config,
    };

    match &cli.command {
        Commands::Bfs {
            graph,
            start: start_vertex,
            max_depth,
            max_nodes,
        } => {
            let opts = ctx.config.traversal.options(*max_depth, *max_nodes);
            traverse::execute_bfs(&ctx, graph, start_vertex, &opts)
        }

        Commands::Dfs {
            graph,
            start: start_vertex,
            recursive,
            max_depth,
            max_nodes,
        } => {
            let opts = ctx.config.traversal.options(*max_depth, *max_nodes);
            let mode = if *recursive {
                DfsMode::Recursive
            } else {
                ctx.config.traversal.dfs_mode
            };
            traverse::execute_dfs(&ctx, graph, start_vertex, mode, &opts)
        }

        Commands::Dijkstra {
            graph,
            source,
            include_unreachable,
        } => shortest::execute(&ctx, graph, source, *include_unreachable),

        Commands::Path {
            graph,
            from,
            to,
            weighted,
        } => path::execute(&ctx, graph, from, to, *weighted),

        Commands::Info { graph } => info::execute(&ctx, graph),
    }?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "total");
    }
    Ok(())
}
