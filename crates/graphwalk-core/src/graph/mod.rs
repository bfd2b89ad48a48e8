//! Graph store, traversal and shortest-path operations
//!
//! Provides the in-memory directed weighted graph and the algorithms that
//! read it:
//! - BFS and DFS traversal in discovery order
//! - Dijkstra shortest paths over non-negative weights
//! - Graph provider trait separating algorithms from storage

pub mod algos;
pub mod document;
pub mod provider;
pub mod store;
pub mod types;
pub mod weight;

pub use algos::{
    bfs, bfs_find_path, bfs_traverse, dfs, dfs_recursive, dfs_traverse, dijkstra, dijkstra_path,
    dijkstra_paths, ShortestPaths,
};
pub use document::{EdgeRecord, GraphDocument};
pub use provider::GraphProvider;
pub use store::Graph;
pub use types::{DfsMode, Edge, Traversal, TraversalOptions, TruncationReason, Visit};
pub use weight::{Vertex, Weight};
