#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(clippy::wildcard_enum_match_arm)]

use clap::CommandFactory;

use super::*;

/// The root help output must contain all top-level subcommand names.
#[test]
fn test_root_help_lists_all_subcommands() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for name in ["verify", "inspect", "order"] {
        assert!(
            help.contains(name),
            "root help should mention subcommand '{name}'"
        );
    }
}

/// The root help output must describe every global flag.
#[test]
fn test_root_help_lists_global_flags() {
    let mut cmd = Cli::command();
    let help = format!("{}", cmd.render_help());
    for flag in [
        "--format",
        "--quiet",
        "--verbose",
        "--max-file-size",
        "--no-color",
        "--help",
        "--version",
    ] {
        assert!(
            help.contains(flag),
            "root help should mention flag '{flag}'"
        );
    }
}

#[test]
fn test_verify_help_mentions_flags() {
    let mut cmd = Cli::command();
    let sub = cmd
        .find_subcommand_mut("verify")
        .expect("verify subcommand should exist");
    let help = format!("{}", sub.render_help());
    assert!(help.contains("--allow-out-of-order"));
    assert!(help.contains("--max-listed"));
    assert!(help.contains("FILE"));
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn test_verify_defaults() {
    let cli = Cli::try_parse_from(["dagcheck", "verify", "m.csv"]).expect("parses");
    match cli.command {
        Command::Verify {
            file: PathOrStdin::Path(p),
            allow_out_of_order,
            max_listed,
        } => {
            assert_eq!(p, PathBuf::from("m.csv"));
            assert!(!allow_out_of_order);
            assert_eq!(max_listed, 10);
        }
        other => panic!("expected Verify with a path, got {other:?}"),
    }
    assert_eq!(cli.format, OutputFormat::Human);
    assert!(!cli.quiet);
}

#[test]
fn test_dash_means_stdin() {
    let cli = Cli::try_parse_from(["dagcheck", "order", "-"]).expect("parses");
    assert!(matches!(
        cli.command,
        Command::Order {
            file: PathOrStdin::Stdin
        }
    ));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "dagcheck",
        "inspect",
        "m.csv",
        "--format",
        "json",
        "--max-file-size",
        "2048",
    ])
    .expect("parses");
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.max_file_size, 2048);
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let result = Cli::try_parse_from(["dagcheck", "-q", "-v", "verify", "m.csv"]);
    assert!(result.is_err(), "--quiet and --verbose must conflict");
}

#[test]
fn test_missing_file_argument_is_rejected() {
    assert!(Cli::try_parse_from(["dagcheck", "verify"]).is_err());
}
