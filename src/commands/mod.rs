//! CLI command implementations.
//!
//! - **expand**: run the greedy expansion and write the selected module
//! - **inspect**: load-only diagnostics for a network and seed file

pub mod expand;
pub mod inspect;

pub use expand::{handle_expand, ExpandConfig};
pub use inspect::{handle_inspect, InspectConfig};
