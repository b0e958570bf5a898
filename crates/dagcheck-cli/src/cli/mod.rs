//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Default for `--max-file-size`: 64 MiB, far above an 800-node fixture
/// (about 2.6 MB).
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` prints an aligned report to stdout and a verdict line to stderr.
/// `Json` prints a single JSON object to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// All top-level subcommands exposed by the `dagcheck` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run every check on a matrix file and report whether it is a valid DAG.
    Verify {
        /// Path to a matrix CSV file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Accept acyclic graphs whose edges do not all point to higher node indices.
        #[arg(long)]
        allow_out_of_order: bool,
        /// Maximum number of self-loops and ordering violations listed in human output.
        #[arg(long, default_value = "10", value_name = "N")]
        max_listed: usize,
    },

    /// Print node, edge, degree and prior statistics for a matrix file.
    Inspect {
        /// Path to a matrix CSV file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print a topological order of the nodes (Kahn's algorithm).
    Order {
        /// Path to a matrix CSV file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `dagcheck` binary.
///
/// Global flags are marked `global = true` so clap propagates them to every
/// subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "dagcheck",
    version,
    about = "Verify prior-weighted DAG adjacency matrices",
    long_about = "Loads an N x (N+1) CSV matrix (column 0 = node priors, columns 1..N =\n\
                  edge weights) and checks it for self-loops, backward edges and cycles."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log parsing and check timings to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `DAGCHECK_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    #[arg(
        long,
        global = true,
        env = "DAGCHECK_MAX_FILE_SIZE",
        default_value_t = DEFAULT_MAX_FILE_SIZE
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output.
    ///
    /// Also respects the `NO_COLOR` environment variable per
    /// <https://no-color.org>.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests;
