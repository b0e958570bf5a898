mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser;
use cli::{Cli, Command, OutputFormat, PathOrStdin};
use dagcheck_core::VerifyPolicy;
use error::CliError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    tracing::debug!(version = dagcheck_core::version(), "dagcheck starting");

    if let Err(e) = dispatch(&cli) {
        if !is_reported(&e) {
            eprintln!("{}", e.message());
        }
        std::process::exit(e.exit_code());
    }
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug, `-q` selects
/// error, and the default is warn.
fn init_tracing(cli: &Cli) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(format::colors_enabled(cli.no_color))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();
}

fn dispatch(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Verify {
            file,
            allow_out_of_order,
            max_listed,
        } => {
            let content = load(file, cli.max_file_size)?;
            let policy = VerifyPolicy {
                allow_out_of_order: *allow_out_of_order,
            };
            cmd::verify::run(
                &content,
                &policy,
                *max_listed,
                cli.format,
                cli.quiet,
                cli.no_color,
            )
        }
        Command::Inspect { file } => {
            let content = load(file, cli.max_file_size)?;
            cmd::inspect::run(&content, cli.format)
        }
        Command::Order { file } => {
            let content = load(file, cli.max_file_size)?;
            cmd::order::run(&content, cli.format, cli.quiet)
        }
    }
}

fn load(file: &PathOrStdin, max_file_size: u64) -> Result<String, CliError> {
    let content = io::read_input(file, max_file_size)?;
    tracing::debug!(source = %io::source_label(file), bytes = content.len(), "input loaded");
    Ok(content)
}

/// Whether the command already explained this failure.
///
/// A rejected verdict is carried by the stderr verdict line in human mode and
/// by `"passed": false` in JSON mode.
fn is_reported(e: &CliError) -> bool {
    match e {
        CliError::VerificationFailed { .. } => true,
        CliError::FileNotFound { .. }
        | CliError::PermissionDenied { .. }
        | CliError::FileTooLarge { .. }
        | CliError::InvalidUtf8 { .. }
        | CliError::StdinReadError { .. }
        | CliError::IoError { .. }
        | CliError::ParseFailed { .. }
        | CliError::NoTopologicalOrder { .. } => false,
    }
}
