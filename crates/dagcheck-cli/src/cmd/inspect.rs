//! Implementation of `dagcheck inspect <file>`.
//!
//! Prints node, edge, degree and prior statistics plus the self-loop and
//! ordering-violation counts. Runs no acyclicity check, so it always exits 0
//! for a well-formed matrix.
//!
//! Exit codes: 0 = success, 2 = read or parse failure.
use std::io::Write as _;

use dagcheck_core::{Adjacency, GraphStats, ordering_violations, parse_matrix, self_loops};

use super::write_failed;
use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{write_json, write_stats_human};

/// Runs the `inspect` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] when `content` is not a well-formed matrix.
/// - [`CliError::IoError`] when the output cannot be written.
pub fn run(content: &str, format: OutputFormat) -> Result<(), CliError> {
    let matrix = parse_matrix(content)?;
    let adjacency = Adjacency::from_matrix(&matrix);
    let stats = GraphStats::compute(&matrix, &adjacency);
    let loops = self_loops(&matrix).len();
    let backward = ordering_violations(&matrix).len();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            write_stats_human(&mut out, &stats).map_err(write_failed("stdout"))?;
            writeln!(out, "self-loops:           {loops}").map_err(write_failed("stdout"))?;
            writeln!(out, "ordering violations:  {backward}").map_err(write_failed("stdout"))?;
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "stats": stats,
                "self_loops": loops,
                "ordering_violations": backward,
            });
            write_json(&mut out, &value).map_err(write_failed("stdout"))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn cyclic_matrix_still_inspects() {
        run("1.0,0.0,0.5\n0.5,0.5,0.0\n", OutputFormat::Json).expect("inspect never verifies");
    }

    #[test]
    fn empty_input_is_a_parse_failure() {
        let err = run("\n\n", OutputFormat::Human).expect_err("empty");
        assert_eq!(err.exit_code(), 2);
    }
}
