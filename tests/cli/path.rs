use crate::cli::support::{graphwalk, stdout_json, write_sample_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_path_fewest_hops() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> D"))
        .stdout(predicate::str::contains("Path length: 2 hops"))
        .stdout(predicate::str::contains("Total weight").not());
}

#[test]
fn test_path_weighted() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .args(["path", "--weighted"])
        .arg(&graph)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> C -> B -> D"))
        .stdout(predicate::str::contains("Path length: 3 hops"))
        .stdout(predicate::str::contains("Total weight: 5"));
}

#[test]
fn test_path_single_hop() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["C", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 1 hop\n"));
}

#[test]
fn test_path_not_found_is_success() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["D", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from D to A"));
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "path", "--weighted"])
        .arg(&graph)
        .args(["A", "D"])
        .output()
        .unwrap();

    let json = stdout_json(&output);
    assert_eq!(json["found"], true);
    assert_eq!(json["path"], serde_json::json!(["A", "C", "B", "D"]));
    assert_eq!(json["hops"], 3);
    assert_eq!(json["weight"], 5.0);
}

#[test]
fn test_path_json_not_found() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    let output = graphwalk()
        .current_dir(dir.path())
        .args(["--format", "json", "path"])
        .arg(&graph)
        .args(["A", "E"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["found"], false);
    assert!(json["path"].is_null());
    assert!(json["hops"].is_null());
}

#[test]
fn test_path_records() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .args(["--format", "records", "path"])
        .arg(&graph)
        .args(["A", "D"])
        .assert()
        .success()
        .stdout(
            "H graphwalk=1 records=1 mode=path from=\"A\" to=\"D\" found=true hops=2\n\
             P \"A\"\nP \"B\"\nP \"D\"\n",
        );
}

#[test]
fn test_path_to_itself() {
    let dir = tempdir().unwrap();
    let graph = write_sample_graph(dir.path());

    graphwalk()
        .current_dir(dir.path())
        .arg("path")
        .arg(&graph)
        .args(["B", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path length: 0 hops"));
}
