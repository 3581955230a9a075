//! File readers and result writers.

pub mod network;
pub mod output;
pub mod seeds;

pub use network::{parse_network, read_network, DEFAULT_SCORE_THRESHOLD};
pub use output::{create_writer, OutputFormat, SelectionWriter};
pub use seeds::{parse_seeds, read_seeds};
