//! Implementation of `dagcheck verify <file>`.
//!
//! Parses the matrix, runs every structural and acyclicity check, and prints
//! the report.
//!
//! Flags:
//! - `--allow-out-of-order`: also accept acyclic graphs with backward edges.
//! - `--max-listed <n>` (default 10): violations listed per category.
//!
//! Exit codes:
//! - 0 = verdict accepted by the policy
//! - 1 = verdict rejected (cyclic, or out of order without the flag)
//! - 2 = the matrix could not be read or parsed
use dagcheck_core::{VerifyPolicy, parse_matrix, verify};

use super::write_failed;
use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{FormatterConfig, write_report_human, write_report_json, write_verdict_line};

/// Runs the `verify` command.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] when `content` is not a well-formed matrix.
/// - [`CliError::VerificationFailed`] when the verdict is not accepted.
/// - [`CliError::IoError`] when the report cannot be written.
pub fn run(
    content: &str,
    policy: &VerifyPolicy,
    max_listed: usize,
    format: OutputFormat,
    quiet: bool,
    no_color: bool,
) -> Result<(), CliError> {
    let matrix = parse_matrix(content)?;
    let report = verify(&matrix);
    let verdict = report.verdict();
    let passed = report.passes(policy);
    tracing::debug!(?verdict, passed, "verification finished");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            let config = FormatterConfig::from_flags(no_color, quiet, max_listed);
            write_report_human(&mut out, &report, &config).map_err(write_failed("stdout"))?;
            let stderr = std::io::stderr();
            let mut err = stderr.lock();
            write_verdict_line(&mut err, verdict, passed, &config)
                .map_err(write_failed("stderr"))?;
        }
        OutputFormat::Json => {
            write_report_json(&mut out, &report, passed).map_err(write_failed("stdout"))?;
        }
    }

    if passed {
        Ok(())
    } else {
        Err(CliError::VerificationFailed { verdict })
    }
}
