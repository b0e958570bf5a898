/// Report formatting: human-readable and JSON modes.
///
/// - **Human mode** (default): an aligned key/value report on stdout, plus a
///   one-line verdict on stderr. The verdict is color-coded unless
///   `--no-color` is set, `NO_COLOR` is present, or stderr is not a TTY.
/// - **JSON mode**: one pretty-printed JSON object on stdout; nothing on
///   stderr except errors.
use std::io::{IsTerminal as _, Write};

use dagcheck_core::{GraphStats, Verdict, VerificationReport};

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag {
        return false;
    }
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Configuration for the report formatter, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled on stderr.
    pub colors: bool,
    /// Suppress the stderr verdict line unless it reports a failure.
    pub quiet: bool,
    /// Maximum violations listed per category in human mode.
    pub max_listed: usize,
}

impl FormatterConfig {
    /// Constructs a [`FormatterConfig`] from the raw CLI flags.
    pub fn from_flags(no_color_flag: bool, quiet: bool, max_listed: usize) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            max_listed,
        }
    }
}

// ---------------------------------------------------------------------------
// Human-mode formatting
// ---------------------------------------------------------------------------

/// Writes the statistics block shared by `verify` and `inspect`.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_stats_human<W: Write>(writer: &mut W, stats: &GraphStats) -> std::io::Result<()> {
    writeln!(writer, "nodes:                {}", stats.node_count)?;
    writeln!(writer, "edges:                {}", stats.edge_count)?;
    writeln!(writer, "possible edges:       {}", stats.possible_edges)?;
    writeln!(writer, "density:              {:.6}", stats.density)?;
    writeln!(
        writer,
        "sources:              {}{}",
        stats.sources.len(),
        preview(&stats.sources, 10)
    )?;
    writeln!(writer, "sinks:                {}", stats.sinks.len())?;
    writeln!(writer, "max in-degree:        {}", stats.max_in_degree)?;
    writeln!(writer, "max out-degree:       {}", stats.max_out_degree)?;
    if let (Some(min), Some(max), Some(mean)) = (stats.prior_min, stats.prior_max, stats.prior_mean)
    {
        writeln!(
            writer,
            "priors:               min {min:.3}, max {max:.3}, mean {mean:.3}"
        )?;
    }
    writeln!(writer, "certain priors (1.0): {}", stats.certain_priors)
}

/// Writes the full verification report in human-readable form.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_report_human<W: Write>(
    writer: &mut W,
    report: &VerificationReport,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    write_stats_human(writer, &report.stats)?;

    writeln!(writer)?;
    writeln!(writer, "self-loops:           {}", report.self_loop_count())?;
    for node in report.self_loops.iter().take(config.max_listed) {
        writeln!(writer, "  {node} -> {node}")?;
    }
    write_truncation(writer, report.self_loops.len(), config.max_listed)?;

    writeln!(
        writer,
        "ordering violations:  {}",
        report.ordering_violation_count()
    )?;
    for v in report.ordering_violations.iter().take(config.max_listed) {
        writeln!(writer, "  {} -> {} (weight: {})", v.source, v.target, v.weight)?;
    }
    write_truncation(writer, report.ordering_violations.len(), config.max_listed)?;

    if !report.prior_violations.is_empty() {
        writeln!(
            writer,
            "priors outside [0,1]: {}",
            report.prior_violations.len()
        )?;
        for v in report.prior_violations.iter().take(config.max_listed) {
            writeln!(writer, "  node {}: {}", v.node, v.prior)?;
        }
        write_truncation(writer, report.prior_violations.len(), config.max_listed)?;
    }

    writeln!(writer)?;
    writeln!(writer, "has cycle (dfs):      {}", report.has_cycle)?;
    if let Some(cycle) = &report.cycle {
        writeln!(writer, "  cycle: {}", join_path(cycle))?;
    }
    writeln!(
        writer,
        "topological sort:     {} ({} of {} nodes)",
        if report.topological_complete {
            "complete"
        } else {
            "incomplete"
        },
        report.topological_order.len(),
        report.stats.node_count
    )?;
    writeln!(writer, "verdict:              {}", report.verdict().describe())
}

fn write_truncation<W: Write>(writer: &mut W, total: usize, shown: usize) -> std::io::Result<()> {
    if total > shown {
        writeln!(writer, "  ... and {} more", total - shown)?;
    }
    Ok(())
}

fn preview(nodes: &[usize], limit: usize) -> String {
    if nodes.is_empty() {
        return String::new();
    }
    let head: Vec<String> = nodes.iter().take(limit).map(ToString::to_string).collect();
    let more = if nodes.len() > limit { ", ..." } else { "" };
    format!(" [{}{more}]", head.join(", "))
}

fn join_path(nodes: &[usize]) -> String {
    nodes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Writes the one-line verdict to `writer` (stderr).
///
/// Passing verdicts are suppressed in quiet mode; failing ones never are.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_verdict_line<W: Write>(
    writer: &mut W,
    verdict: Verdict,
    passed: bool,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet && passed {
        return Ok(());
    }
    let (tag, color) = match (verdict, passed) {
        (Verdict::ValidDag, _) => ("[OK]", ANSI_GREEN),
        (Verdict::OutOfOrder, true) => ("[OK]", ANSI_YELLOW),
        (Verdict::OutOfOrder, false) | (Verdict::Cyclic, _) => ("[FAIL]", ANSI_RED),
    };
    if config.colors {
        writeln!(writer, "{color}{tag}{ANSI_RESET} {}", verdict.describe())
    } else {
        writeln!(writer, "{tag} {}", verdict.describe())
    }
}

// ---------------------------------------------------------------------------
// JSON-mode formatting
// ---------------------------------------------------------------------------

/// Writes the verification report as one JSON object.
///
/// Shape: `{"verdict": "...", "passed": bool, "report": {...}}`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_report_json<W: Write>(
    writer: &mut W,
    report: &VerificationReport,
    passed: bool,
) -> std::io::Result<()> {
    let value = serde_json::json!({
        "verdict": report.verdict(),
        "passed": passed,
        "report": report,
    });
    write_json(writer, &value)
}

/// Writes a JSON value pretty-printed, followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(writer: &mut W, value: &serde_json::Value) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
