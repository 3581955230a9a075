//! Immutable interaction network model.
//!
//! Node identifiers are interned to dense `u32` indices at construction time
//! so the expansion loop works on integer indices and slice lookups instead
//! of hashing strings. The adjacency lists and degrees built here are the
//! precomputed snapshot the engine queries every iteration; the network is
//! never mutated after `build()`.

use std::collections::{BTreeSet, HashMap};

/// Undirected simple graph over string node identifiers.
///
/// No self-loops, no multi-edges: a pair of nodes is either connected or
/// not. Construction collapses duplicates and drops self-loops silently.
#[derive(Debug, Clone)]
pub struct Network {
    labels: Vec<String>,
    index: HashMap<String, u32>,
    adjacency: Vec<Vec<u32>>,
    edge_count: usize,
}

impl Network {
    /// Number of nodes (the hypergeometric population size).
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Dense index for an identifier, if the node exists.
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.index.get(id).copied()
    }

    /// Identifier for a dense index.
    ///
    /// # Panics
    /// Panics if `node` is out of range; indices only come from this network.
    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    /// Neighbor indices, sorted ascending. Empty slice for isolated nodes.
    pub fn neighbors(&self, node: u32) -> &[u32] {
        &self.adjacency[node as usize]
    }

    pub fn degree(&self, node: u32) -> usize {
        self.adjacency[node as usize].len()
    }

    /// All node indices, `0..node_count`.
    pub fn nodes(&self) -> impl Iterator<Item = u32> + '_ {
        0..self.labels.len() as u32
    }
}

/// Accumulates edges, then freezes them into a [`Network`].
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    labels: Vec<String>,
    index: HashMap<String, u32>,
    edges: BTreeSet<(u32, u32)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn intern(&mut self, id: &str) -> u32 {
        if let Some(&idx) = self.index.get(id) {
            return idx;
        }
        let idx = self.labels.len() as u32;
        self.labels.push(id.to_string());
        self.index.insert(id.to_string(), idx);
        idx
    }

    /// Registers a node without requiring an incident edge.
    ///
    /// Isolated nodes still count toward the population size, so inputs that
    /// list nodes separately from edges can declare them here.
    pub fn add_node(&mut self, id: &str) -> &mut Self {
        self.intern(id);
        self
    }

    /// Adds an undirected edge. Self-loops are dropped; duplicates collapse.
    pub fn add_edge(&mut self, a: &str, b: &str) -> &mut Self {
        let ia = self.intern(a);
        let ib = self.intern(b);
        if ia != ib {
            self.edges.insert((ia.min(ib), ia.max(ib)));
        }
        self
    }

    pub fn build(self) -> Network {
        let mut adjacency = vec![Vec::new(); self.labels.len()];
        for &(a, b) in &self.edges {
            adjacency[a as usize].push(b);
            adjacency[b as usize].push(a);
        }
        for list in &mut adjacency {
            list.sort_unstable();
        }
        Network {
            labels: self.labels,
            index: self.index,
            adjacency,
            edge_count: self.edges.len(),
        }
    }
}
