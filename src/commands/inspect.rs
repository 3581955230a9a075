use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::graph::Network;
use crate::io::{network, seeds};

pub struct InspectConfig {
    pub network: PathBuf,
    pub seeds: Option<PathBuf>,
    pub score_threshold: f64,
}

pub fn handle_inspect(config: InspectConfig) -> Result<()> {
    let net = network::read_network(&config.network, config.score_threshold)?;

    println!("{}", "Network".bold());
    println!("  nodes: {}", net.node_count());
    println!("  edges: {}", net.edge_count());

    let mut degrees: Vec<usize> = net.nodes().map(|n| net.degree(n)).collect();
    degrees.sort_unstable();
    let isolated = degrees.iter().take_while(|&&d| d == 0).count();
    let mean = degrees.iter().sum::<usize>() as f64 / degrees.len().max(1) as f64;
    println!("  degree: min {}, mean {:.2}, max {}", degrees.first().unwrap_or(&0), mean, degrees.last().unwrap_or(&0));
    if isolated > 0 {
        println!("  isolated nodes: {}", isolated.to_string().yellow());
    }

    println!("  top hubs:");
    for (label, degree) in top_hubs(&net, 5) {
        println!("    {label} ({degree})");
    }

    if let Some(path) = &config.seeds {
        let seed_set = seeds::read_seeds(path)?;
        let present: Vec<&String> = seed_set
            .iter()
            .filter(|s| net.index_of(s).is_some())
            .collect();
        let missing: Vec<&String> = seed_set
            .iter()
            .filter(|s| net.index_of(s).is_none())
            .collect();
        println!("{}", "Seeds".bold());
        println!(
            "  in network: {} / {}",
            present.len().to_string().green(),
            seed_set.len()
        );
        if !missing.is_empty() {
            let joined = missing
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            println!("  missing: {}", joined.yellow());
        }
    }

    Ok(())
}

// Highest-degree nodes, label order on equal degree.
fn top_hubs(net: &Network, limit: usize) -> Vec<(String, usize)> {
    let mut nodes: Vec<(String, usize)> = net
        .nodes()
        .map(|n| (net.label(n).to_string(), net.degree(n)))
        .collect();
    nodes.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    nodes.truncate(limit);
    nodes
}
