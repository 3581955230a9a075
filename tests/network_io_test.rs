//! Reading networks and seed lists from real files.

use std::fs;

use diamond::io::{read_network, read_seeds, DEFAULT_SCORE_THRESHOLD};
use indoc::indoc;
use tempfile::TempDir;

#[test]
fn reads_string_style_tsv_and_applies_threshold() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("network.tsv");
    fs::write(
        &path,
        indoc! {"
            protein1\tprotein2\tcombined_score
            ENO1\tPGK1\t900
            ENO1\tHK2\t150
            PGK1\tHK2\t455
        "},
    )
    .unwrap();

    let net = read_network(&path, DEFAULT_SCORE_THRESHOLD).unwrap();
    assert_eq!(net.edge_count(), 2);
    assert!(net.index_of("ENO1").is_some());
    assert!(net.index_of("protein1").is_none());

    // a lower threshold keeps the weak edge
    let net = read_network(&path, 100.0).unwrap();
    assert_eq!(net.edge_count(), 3);
}

#[test]
fn reads_plain_whitespace_edge_list() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("edges.txt");
    fs::write(&path, "A B\nB C\nC A\n").unwrap();
    let net = read_network(&path, DEFAULT_SCORE_THRESHOLD).unwrap();
    assert_eq!(net.node_count(), 3);
    assert_eq!(net.edge_count(), 3);
}

#[test]
fn empty_network_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");
    fs::write(&path, "\n\n").unwrap();
    let err = read_network(&path, DEFAULT_SCORE_THRESHOLD).unwrap_err();
    assert!(err.to_string().contains("no usable edges"));
}

#[test]
fn missing_network_file_reports_the_path() {
    let err = read_network(std::path::Path::new("/no/such/file.tsv"), 400.0).unwrap_err();
    assert!(err.to_string().contains("/no/such/file.tsv"));
}

#[test]
fn reads_seed_files_with_mixed_separators() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seeds.txt");
    fs::write(&path, "ENO1\nPGK1, HK2\n\n").unwrap();
    let seeds = read_seeds(&path).unwrap();
    assert_eq!(seeds.len(), 3);
    assert!(seeds.contains("HK2"));
}

#[test]
fn seed_file_without_identifiers_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("seeds.txt");
    fs::write(&path, "   \n\n").unwrap();
    assert!(read_seeds(&path).is_err());
}
