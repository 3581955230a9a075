//! DIAMOnD-style disease module detection.
//!
//! Given an interaction network and a set of seed nodes, the crate greedily
//! admits the nodes whose connectivity to the growing cluster is least
//! likely under a hypergeometric null model. See [`expand::expand`] for the
//! algorithm and [`io`] for the file formats.

pub mod cli;
pub mod commands;
pub mod expand;
pub mod graph;
pub mod io;
pub mod stats;

// Re-export the library surface most callers need.
pub use crate::expand::{
    expand, ExpandError, Expansion, ExpansionParams, SelectionRecord, Termination,
};
pub use crate::graph::{Network, NetworkBuilder};
pub use crate::io::output::ExpansionReport;
