#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod adjacency;
pub mod cycles;
pub mod matrix;
pub mod report;
pub mod stats;
pub mod structure;
pub mod topo;

pub use adjacency::{Adjacency, GraphError};
pub use cycles::{find_cycle, has_cycle};
pub use matrix::{MIN_WRITTEN_WEIGHT, MatrixEdge, ParseError, PriorMatrix, parse_matrix};
pub use report::{Verdict, VerificationReport, VerifyPolicy, verify};
pub use stats::GraphStats;
pub use structure::{
    EdgeViolation, PriorViolation, ordering_violations, prior_violations, self_loops,
};
pub use topo::{TopologicalOrder, kahn_order};

/// Returns the version of the dagcheck-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
