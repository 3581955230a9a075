//! Greedy disease-module expansion.
//!
//! Starting from the seed nodes present in the network, each iteration
//! scores every candidate (non-cluster node with at least one edge into the
//! cluster) with the hypergeometric upper-tail test and admits the single
//! most significant one. The loop is strictly sequential across iterations;
//! within an iteration candidates are scored in parallel and reduced with a
//! total order, so runs are deterministic.
//!
//! Ties at the minimum p-value break by lexicographic (byte) order of the
//! node identifier. This is a designed rule: enumeration order of candidate
//! sets is not a stable thing to depend on.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

use crate::graph::Network;
use crate::stats;

#[derive(Debug, Error)]
pub enum ExpandError {
    /// None of the supplied seed identifiers exist in the network.
    #[error("none of the {given} seed identifiers are present in the network")]
    EmptySeedSet { given: usize },
}

/// Knobs for one expansion run.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExpansionParams {
    /// Number of nodes to add (X).
    pub count: usize,
    /// Seed weight amplifying cluster size in the null model, >= 1.
    pub alpha: u64,
}

impl ExpansionParams {
    pub fn new(count: usize, alpha: u64) -> Self {
        Self {
            count,
            alpha: alpha.max(1),
        }
    }
}

/// One admitted node, in admission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionRecord {
    pub node: String,
    pub p_value: f64,
    /// 1-based admission index.
    pub iteration: usize,
}

/// Why the run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// Added exactly the requested number of nodes.
    TargetReached,
    /// The cluster swallowed the whole network.
    NoCandidates,
    /// Every remaining candidate has zero degree or no edge into the cluster.
    NoScorableCandidate,
}

/// Result of a completed run.
#[derive(Debug, Serialize)]
pub struct Expansion {
    pub records: Vec<SelectionRecord>,
    pub termination: Termination,
    /// Seeds found in the network, sorted.
    pub seeds_in_network: Vec<String>,
    /// Seeds absent from the network (non-fatal, already warned about).
    pub seeds_missing: Vec<String>,
}

/// Runs the greedy expansion to completion.
///
/// Missing seeds are filtered with a warning; if no seed is present at all
/// the run fails with [`ExpandError::EmptySeedSet`]. Termination before the
/// target count is not an error, the partial result carries its reason.
pub fn expand(
    network: &Network,
    seeds: &BTreeSet<String>,
    params: &ExpansionParams,
) -> Result<Expansion, ExpandError> {
    let n = network.node_count();
    let mut in_cluster = vec![false; n];
    let mut seeds_in_network = Vec::new();
    let mut seeds_missing = Vec::new();
    for seed in seeds {
        match network.index_of(seed) {
            Some(idx) => {
                in_cluster[idx as usize] = true;
                seeds_in_network.push(seed.clone());
            }
            None => seeds_missing.push(seed.clone()),
        }
    }
    if !seeds_missing.is_empty() {
        log::warn!(
            "{} seed identifier(s) not found in network: {}",
            seeds_missing.len(),
            seeds_missing.join(", ")
        );
    }
    if seeds_in_network.is_empty() {
        return Err(ExpandError::EmptySeedSet { given: seeds.len() });
    }
    log::info!(
        "network: {} nodes, {} edges; seeds in network: {}",
        n,
        network.edge_count(),
        seeds_in_network.len()
    );

    // Per-node count of neighbors inside the cluster, maintained
    // incrementally: only neighbors of the newly admitted node change.
    let mut cluster_neighbors = vec![0u32; n];
    for node in network.nodes() {
        if in_cluster[node as usize] {
            for &nb in network.neighbors(node) {
                cluster_neighbors[nb as usize] += 1;
            }
        }
    }

    let population = n as u64;
    let mut cluster_len = seeds_in_network.len();
    let mut records = Vec::with_capacity(params.count);

    let termination = loop {
        if records.len() == params.count {
            break Termination::TargetReached;
        }
        let successes = stats::effective_cluster_size(params.alpha, cluster_len, n);

        let candidates: Vec<u32> = network
            .nodes()
            .filter(|&node| !in_cluster[node as usize])
            .collect();
        if candidates.is_empty() {
            break Termination::NoCandidates;
        }

        let best = candidates
            .par_iter()
            .filter_map(|&node| {
                let degree = network.degree(node) as u64;
                let observed = u64::from(cluster_neighbors[node as usize]);
                if degree == 0 || observed == 0 {
                    return None;
                }
                let p = stats::survival(population, successes, degree, observed);
                log::debug!(
                    "scored {}: N={} s={} k={} kb={} p={:.3e}",
                    network.label(node),
                    population,
                    successes,
                    degree,
                    observed,
                    p
                );
                Some((p, node))
            })
            .min_by(|a, b| rank(network, a, b));

        let Some((p_value, winner)) = best else {
            break Termination::NoScorableCandidate;
        };

        let iteration = records.len() + 1;
        log::info!(
            "added {} (p={:.3e}) [{}/{}]",
            network.label(winner),
            p_value,
            iteration,
            params.count
        );
        records.push(SelectionRecord {
            node: network.label(winner).to_string(),
            p_value,
            iteration,
        });
        in_cluster[winner as usize] = true;
        cluster_len += 1;
        for &nb in network.neighbors(winner) {
            cluster_neighbors[nb as usize] += 1;
        }
    };

    Ok(Expansion {
        records,
        termination,
        seeds_in_network,
        seeds_missing,
    })
}

// Total order over scored candidates: p-value first, identifier on ties.
// Identifiers are unique, so the minimum is independent of reduction order.
fn rank(network: &Network, a: &(f64, u32), b: &(f64, u32)) -> Ordering {
    a.0
        .total_cmp(&b.0)
        .then_with(|| network.label(a.1).cmp(network.label(b.1)))
}
