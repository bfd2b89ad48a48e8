//! Graphwalk Core Library
//!
//! In-memory directed weighted graph with breadth-first and depth-first
//! traversal and Dijkstra single-source shortest paths.
//!
//! ```
//! use graphwalk_core::graph::{bfs, dijkstra, Graph};
//!
//! let mut graph: Graph<u32, u32> = Graph::new();
//! graph.add_edge(0, 1, 4);
//! graph.add_edge(0, 2, 1);
//! graph.add_edge(2, 1, 2);
//!
//! assert_eq!(bfs(&graph, &0), vec![0, 1, 2]);
//! assert_eq!(dijkstra(&graph, &0).unwrap()[&1], 3);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
