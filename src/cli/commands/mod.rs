//! Command implementations for the daqcsv CLI
//!
//! This module contains the command execution logic and shared reporting
//! helpers. Each command is implemented in its own module:
//! - `inspect`: parse an export and report its contents
//! - `convert`: parse an export and write it back out normalized
//! - `validate`: probe files for the format without full parsing

pub mod convert;
pub mod inspect;
pub mod shared;
pub mod validate;

use tokio_util::sync::CancellationToken;

use crate::cli::args::{Args, Commands};
use crate::Result;

/// Main command runner for daqcsv
///
/// Dispatches to the appropriate subcommand handler. The cancellation token
/// is wired to ctrl-c by `main` and aborts an in-flight parse at its next
/// line read.
pub async fn run(args: Args, cancel: CancellationToken) -> Result<()> {
    match args.get_command() {
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args, cancel).await,
        Commands::Convert(convert_args) => convert::run_convert(convert_args, cancel).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
    }
}
