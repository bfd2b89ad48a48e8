//! CLI argument parsing for graphwalk
//!
//! Uses clap derive. Global flags: --format, --config, --quiet, --verbose

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use graphwalk_core::format::OutputFormat;
use parse::parse_format;

/// Graphwalk - graph traversal and shortest paths over graph documents
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records); defaults to the config value
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Configuration file (defaults to ./graphwalk.toml when present)
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. debug, or graphwalk_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Breadth-first traversal order from a start vertex
    Bfs {
        /// Graph document (.json or .toml)
        graph: PathBuf,

        /// Start vertex
        start: String,

        /// Do not expand vertices at this hop depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Stop after discovering this many vertices
        #[arg(long)]
        max_nodes: Option<usize>,
    },

    /// Depth-first traversal order from a start vertex
    Dfs {
        /// Graph document (.json or .toml)
        graph: PathBuf,

        /// Start vertex
        start: String,

        /// Use the recursive form instead of the explicit stack
        #[arg(long)]
        recursive: bool,

        /// Do not expand vertices at this depth
        #[arg(long)]
        max_depth: Option<usize>,

        /// Stop after discovering this many vertices
        #[arg(long)]
        max_nodes: Option<usize>,
    },

    /// Shortest distance from a source to every reachable vertex
    Dijkstra {
        /// Graph document (.json or .toml)
        graph: PathBuf,

        /// Source vertex
        source: String,

        /// Also list unreachable vertices
        #[arg(long)]
        include_unreachable: bool,
    },

    /// Find a path between two vertices
    Path {
        /// Graph document (.json or .toml)
        graph: PathBuf,

        /// Source vertex
        from: String,

        /// Target vertex
        to: String,

        /// Minimize total weight instead of hop count
        #[arg(long)]
        weighted: bool,
    },

    /// Show vertex and edge counts
    Info {
        /// Graph document (.json or .toml)
        graph: PathBuf,
    },
}
