//! Binary-level smoke tests.

use std::fs;

use assert_cmd::Command;
use tempfile::TempDir;

fn write_fixture(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let network = dir.path().join("network.txt");
    fs::write(&network, "A B\nB C\nC D\n").unwrap();
    let seeds = dir.path().join("seeds.txt");
    fs::write(&seeds, "A\n").unwrap();
    (network, seeds)
}

#[test]
fn expand_writes_one_node_per_line() {
    let dir = TempDir::new().unwrap();
    let (network, seeds) = write_fixture(&dir);
    let out = dir.path().join("module.txt");

    Command::cargo_bin("diamond")
        .unwrap()
        .args(["expand"])
        .arg(&network)
        .arg("--seeds")
        .arg(&seeds)
        .args(["--num", "2", "--output"])
        .arg(&out)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&out).unwrap(), "B\nC\n");
}

#[test]
fn expand_fails_when_no_seed_is_present() {
    let dir = TempDir::new().unwrap();
    let (network, _) = write_fixture(&dir);
    let seeds = dir.path().join("bad_seeds.txt");
    fs::write(&seeds, "NOT_A_NODE\n").unwrap();

    Command::cargo_bin("diamond")
        .unwrap()
        .args(["expand"])
        .arg(&network)
        .arg("--seeds")
        .arg(&seeds)
        .assert()
        .failure()
        .stderr(predicates::str::contains("seed"));
}

#[test]
fn expand_emits_json_with_records() {
    let dir = TempDir::new().unwrap();
    let (network, seeds) = write_fixture(&dir);

    let assert = Command::cargo_bin("diamond")
        .unwrap()
        .args(["expand"])
        .arg(&network)
        .arg("--seeds")
        .arg(&seeds)
        .args(["--num", "1", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["added"][0]["node"], "B");
    assert_eq!(value["termination"], "target_reached");
}

#[test]
fn inspect_reports_counts() {
    let dir = TempDir::new().unwrap();
    let (network, seeds) = write_fixture(&dir);

    Command::cargo_bin("diamond")
        .unwrap()
        .args(["inspect"])
        .arg(&network)
        .arg("--seeds")
        .arg(&seeds)
        .assert()
        .success()
        .stdout(predicates::str::contains("nodes: 4"))
        .stdout(predicates::str::contains("edges: 3"));
}
