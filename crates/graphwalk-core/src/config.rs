//! Configuration for graphwalk
//!
//! Read from `graphwalk.toml` in the working directory when present, or from
//! an explicit path. Every field has a default, so an empty file is valid.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::OutputFormat;
use crate::graph::{DfsMode, TraversalOptions};

/// File name looked up by [`GraphwalkConfig::discover`]
pub const CONFIG_FILE_NAME: &str = "graphwalk.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphwalkConfig {
    #[serde(default)]
    pub graph: GraphConfig,

    #[serde(default)]
    pub traversal: TraversalConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// How graph documents are turned into graphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Add edge endpoints missing from `vertices` instead of rejecting them
    #[serde(default = "default_implicit_vertices")]
    pub implicit_vertices: bool,
}

/// Defaults for BFS/DFS
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraversalConfig {
    #[serde(default)]
    pub dfs_mode: DfsMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nodes: Option<usize>,
}

/// Output defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_implicit_vertices() -> bool {
    true
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            implicit_vertices: default_implicit_vertices(),
        }
    }
}

impl TraversalConfig {
    /// Traversal limits, with explicit overrides taking precedence
    pub fn options(&self, max_depth: Option<usize>, max_nodes: Option<usize>) -> TraversalOptions {
        TraversalOptions {
            max_depth: max_depth.or(self.max_depth),
            max_nodes: max_nodes.or(self.max_nodes),
        }
    }
}

impl GraphwalkConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GraphwalkConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `graphwalk.toml` from `dir`, or defaults if there is none
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolve the configuration for a run: an explicit path must exist,
    /// otherwise fall back to discovery in `dir`
    pub fn resolve(explicit: Option<&PathBuf>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(dir),
        }
    }
}
