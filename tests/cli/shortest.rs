use crate::cli::support::{graphwalk, stdout_json, write_graph, write_sample_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_dijkstra_human_in_settle_order() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "dijkstra"])
        .arg(&graph)
        .arg("A")
        .assert()
        .success()
        .stdout("A\t0\nC\t1\nB\t3\nD\t5\n");
}

#[test]
fn test_dijkstra_summary() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .arg("dijkstra")
        .arg(&graph)
        .arg("A")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reachable: 4 of 5"));
}

#[test]
fn test_dijkstra_include_unreachable() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "dijkstra", "--include-unreachable"])
        .arg(&graph)
        .arg("C")
        .assert()
        .success()
        .stdout("C\t0\nB\t2\nD\t4\nA\tunreachable\nE\tunreachable\n");
}

#[test]
fn test_dijkstra_json() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra", "--include-unreachable"])
        .arg(&graph)
        .arg("A")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], "A");
    assert_eq!(json["reachable"], 4);

    let distances = json["distances"].as_array().unwrap();
    assert_eq!(distances.len(), 5);
    assert_eq!(distances[2]["vertex"], "B");
    assert_eq!(distances[2]["distance"], 3.0);
    assert_eq!(distances[4]["vertex"], "E");
    assert!(distances[4]["distance"].is_null());
}

#[test]
fn test_dijkstra_records() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "records", "dijkstra"])
        .arg(&graph)
        .arg("A")
        .assert()
        .success()
        .stdout(
            "H graphwalk=1 records=1 mode=dijkstra source=\"A\" reachable=4\n\
             D \"A\" 0\nD \"C\" 1\nD \"B\" 3\nD \"D\" 5\n",
        );
}

#[test]
fn test_dijkstra_negative_weight_fails() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "negative.json",
        r#"{"edges": [{"from": "A", "to": "B", "weight": -1}]}"#,
    );

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra"])
        .arg(&graph)
        .arg("A")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"type\":\"negative_weight\""));
}

#[test]
fn test_dijkstra_ignores_unreachable_negative_weight() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "island.json",
        r#"{"edges": [
            {"from": "A", "to": "B", "weight": 1},
            {"from": "X", "to": "Y", "weight": -3}
        ]}"#,
    );

    graphwalk()
        .current_dir(dir.path())
        .args(["--quiet", "dijkstra"])
        .arg(&graph)
        .arg("A")
        .assert()
        .success()
        .stdout("A\t0\nB\t1\n");
}

#[test]
fn test_dijkstra_rejects_infinite_weight() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "infinite.toml",
        r#"
vertices = ["A", "B", "C"]

[[edges]]
from = "A"
to = "B"
weight = inf
"#,
    );

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra", "--include-unreachable"])
        .arg(&graph)
        .arg("A")
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("\"type\":\"invalid_weight\""));
}

#[test]
fn test_dijkstra_json_unreachable_distinct_from_reachable() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "heavy.toml",
        r#"
vertices = ["A", "B", "C"]

[[edges]]
from = "A"
to = "B"
weight = 1e300
"#,
    );

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "dijkstra", "--include-unreachable"])
        .arg(&graph)
        .arg("A")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let distances = json["distances"].as_array().unwrap();
    assert_eq!(json["reachable"], 2);
    assert_eq!(distances[1]["vertex"], "B");
    assert_eq!(distances[1]["distance"], 1e300);
    assert_eq!(distances[2]["vertex"], "C");
    assert!(distances[2]["distance"].is_null());
}
