//! Statistical significance tests for network over-connectivity.

mod hypergeom;

pub use hypergeom::{effective_cluster_size, survival};
