//! Implementation of `dagcheck order <file>`.
//!
//! Prints a topological order computed with Kahn's algorithm, one node index
//! per line in human mode. When the graph has a cycle the partial order is
//! still printed, the nodes that could not be ordered are listed on stderr,
//! and the command exits 1.
//!
//! Exit codes: 0 = complete order, 1 = cycle present, 2 = read or parse failure.
use std::io::Write as _;

use dagcheck_core::{Adjacency, kahn_order, parse_matrix};

use super::write_failed;
use crate::OutputFormat;
use crate::error::CliError;
use crate::format::write_json;

/// Runs the `order` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] when `content` is not a well-formed matrix.
/// - [`CliError::NoTopologicalOrder`] when some nodes lie on or behind a cycle.
/// - [`CliError::IoError`] when the output cannot be written.
pub fn run(content: &str, format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let matrix = parse_matrix(content)?;
    let adjacency = Adjacency::from_matrix(&matrix);
    let total = adjacency.node_count();
    let topo = kahn_order(&adjacency);
    let unresolved = topo.unresolved(total);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            for node in &topo.order {
                writeln!(out, "{node}").map_err(write_failed("stdout"))?;
            }
            if !unresolved.is_empty() && !quiet {
                let stderr = std::io::stderr();
                let mut err = stderr.lock();
                let listed: Vec<String> = unresolved.iter().map(ToString::to_string).collect();
                writeln!(err, "unordered nodes: {}", listed.join(", "))
                    .map_err(write_failed("stderr"))?;
            }
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "complete": topo.complete,
                "order": topo.order,
                "unresolved": unresolved,
            });
            write_json(&mut out, &value).map_err(write_failed("stdout"))?;
        }
    }

    if topo.complete {
        Ok(())
    } else {
        Err(CliError::NoTopologicalOrder {
            emitted: topo.order.len(),
            total,
        })
    }
}
