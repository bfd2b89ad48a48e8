//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first traversal
//! - `dfs`: Depth-first traversal, iterative and recursive
//! - `dijkstra`: Weighted single-source shortest paths
//! - `path`: Fewest-hop path finding and path reconstruction
//! - `shared`: Per-call traversal state used by BFS and DFS

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod path;
pub(crate) mod shared;

pub use bfs::{bfs, bfs_traverse};
pub use dfs::{dfs, dfs_recursive, dfs_traverse};
pub use dijkstra::{dijkstra, dijkstra_path, dijkstra_paths, ShortestPaths};
pub use path::bfs_find_path;
