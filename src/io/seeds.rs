//! Seed identifier files: one identifier per line, commas also accepted.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Loads seed identifiers. An empty or identifier-free file is an error;
/// seeds are the one input the algorithm cannot invent.
pub fn read_seeds(path: &Path) -> Result<BTreeSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read seeds file {}", path.display()))?;
    let seeds = parse_seeds(&content);
    anyhow::ensure!(
        !seeds.is_empty(),
        "no seed identifiers found in {}",
        path.display()
    );
    Ok(seeds)
}

pub fn parse_seeds(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .flat_map(|line| line.split(','))
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}
