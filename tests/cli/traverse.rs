use crate::cli::support::{graphwalk, stdout_json, write_graph, write_sample_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_bfs_human_indents_by_depth() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .arg("bfs")
        .arg(&graph)
        .arg("A")
        .assert()
        .success()
        .stdout("A\n  B\n  C\n    D\n\nVisited: 4\n");
}

#[test]
fn test_bfs_quiet_omits_summary() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "bfs"])
        .arg(&graph)
        .arg("A")
        .assert()
        .success()
        .stdout("A\n  B\n  C\n    D\n");
}

#[test]
fn test_bfs_json() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "bfs"])
        .arg(&graph)
        .arg("A")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "bfs");
    assert_eq!(json["start"], "A");
    assert_eq!(json["order"], serde_json::json!(["A", "B", "C", "D"]));
    assert_eq!(json["visits"][3]["depth"], 2);
    assert_eq!(json["truncated"], false);
    assert!(json["truncation_reason"].is_null());
}

#[test]
fn test_bfs_max_depth_truncates() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "bfs", "--max-depth", "1"])
        .arg(&graph)
        .arg("A")
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["order"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["truncated"], true);
    assert_eq!(json["truncation_reason"], "max_depth");
}

#[test]
fn test_bfs_records() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "records", "bfs", "--max-nodes", "2"])
        .arg(&graph)
        .arg("A")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphwalk=1 records=1 mode=bfs start=\"A\" visited=2 truncated=max_nodes\n",
        ))
        .stdout(predicate::str::contains("V \"A\" depth=0\nV \"B\" depth=1\n"));
}

#[test]
fn test_dfs_order() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "dfs"])
        .arg(&graph)
        .arg("A")
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["algorithm"], "dfs");
    assert_eq!(json["order"], serde_json::json!(["A", "B", "D", "C"]));
}

#[test]
fn test_dfs_recursive_matches_iterative() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let iterative = graphwalk()
        .current_dir(dir.path())
        .arg("dfs")
        .arg(&graph)
        .arg("A")
        .output()
        .unwrap();
    let recursive = graphwalk()
        .current_dir(dir.path())
        .args(["dfs", "--recursive"])
        .arg(&graph)
        .arg("A")
        .output()
        .unwrap();

    assert!(iterative.status.success());
    assert_eq!(iterative.stdout, recursive.stdout);
}

#[test]
fn test_traversal_from_isolated_vertex() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "dfs"])
        .arg(&graph)
        .arg("E")
        .assert()
        .success()
        .stdout("E\n");
}

#[test]
fn test_toml_document() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "graph.toml",
        r#"
[[edges]]
from = "x"
to = "y"

[[edges]]
from = "y"
to = "z"
"#,
    );

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "bfs"])
        .arg(&graph)
        .arg("x")
        .assert()
        .success()
        .stdout("x\n  y\n    z\n");
}
