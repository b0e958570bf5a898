/// Command module for the `dagcheck` CLI.
///
/// Each submodule implements one subcommand. The `run` function in each
/// module takes the already-read input text plus the parsed arguments and
/// returns `Ok(())` on success or a [`crate::error::CliError`] on failure.
pub mod inspect;
pub mod order;
pub mod verify;

use crate::error::CliError;

/// Maps a failed write to stdout or stderr into a [`CliError::IoError`].
pub(crate) fn write_failed(stream: &str) -> impl FnOnce(std::io::Error) -> CliError + '_ {
    move |e| CliError::IoError {
        source: stream.to_owned(),
        detail: e.to_string(),
    }
}
