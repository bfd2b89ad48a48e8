use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphwalk
pub fn graphwalk() -> Command {
    cargo_bin_cmd!("graphwalk")
}

/// Weighted sample used across the CLI tests.
///
/// A->B (4), A->C (1), B->D (2), C->B (2), C->D (5); E is isolated.
pub const SAMPLE_GRAPH: &str = r#"{
    "vertices": ["A", "B", "C", "D", "E"],
    "edges": [
        {"from": "A", "to": "B", "weight": 4},
        {"from": "A", "to": "C", "weight": 1},
        {"from": "B", "to": "D", "weight": 2},
        {"from": "C", "to": "B", "weight": 2},
        {"from": "C", "to": "D", "weight": 5}
    ]
}"#;

/// Write [`SAMPLE_GRAPH`] to `dir/sample.json`
pub fn write_sample_graph(dir: &Path) -> PathBuf {
    write_graph(dir, "sample.json", SAMPLE_GRAPH)
}

/// Write a graph document and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Parse stdout as JSON
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
