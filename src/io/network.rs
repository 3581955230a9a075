//! Edge-list network files.
//!
//! Accepts two layouts per row: `nodeA nodeB` or `nodeA nodeB score`
//! (STRING-style TSV). The delimiter is sniffed from the start of the file:
//! tab wins over comma, anything else falls back to whitespace splitting.
//! When the third column parses as a number it is a confidence score and
//! rows below the threshold are dropped; a non-numeric third column means
//! the file is a plain edge list with extra annotation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::graph::{Network, NetworkBuilder};

/// STRING confidence scores run 0..1000; 400 is the usual "medium
/// confidence" cutoff.
pub const DEFAULT_SCORE_THRESHOLD: f64 = 400.0;

const HEADER_TOKENS: &[&str] = &["protein1", "protein2", "node1", "node2", "gene", "protein"];
const SNIFF_BYTES: usize = 2048;

/// Loads a network file, dropping scored edges below `score_threshold`.
pub fn read_network(path: &Path, score_threshold: f64) -> Result<Network> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read network file {}", path.display()))?;
    let network = parse_network(&content, score_threshold);
    anyhow::ensure!(
        network.node_count() > 0,
        "network file {} contains no usable edges",
        path.display()
    );
    Ok(network)
}

/// Parses edge-list text into a [`Network`].
pub fn parse_network(content: &str, score_threshold: f64) -> Network {
    let delimiter = sniff_delimiter(content);
    let mut builder = NetworkBuilder::new();
    for line in content.lines() {
        let fields: Vec<&str> = match delimiter {
            Some(d) => line
                .split(d)
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .collect(),
            None => line.split_whitespace().collect(),
        };
        if fields.len() < 2 {
            continue;
        }
        if looks_like_header(fields[0]) || looks_like_header(fields[1]) {
            continue;
        }
        if let Some(third) = fields.get(2) {
            if let Ok(score) = third.parse::<f64>() {
                if score < score_threshold {
                    continue;
                }
            }
        }
        builder.add_edge(fields[0], fields[1]);
    }
    builder.build()
}

fn looks_like_header(field: &str) -> bool {
    let lower = field.to_ascii_lowercase();
    HEADER_TOKENS.contains(&lower.as_str())
}

fn sniff_delimiter(content: &str) -> Option<char> {
    let sample = &content.as_bytes()[..content.len().min(SNIFF_BYTES)];
    if sample.contains(&b'\t') {
        Some('\t')
    } else if sample.contains(&b',') {
        Some(',')
    } else {
        None
    }
}
