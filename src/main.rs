//! Pathweave - shortest paths and traversals over text mazes
//!
//! Loads a maze file, turns it into a graph and runs one of the engines
//! from `pathweave-core` on it.

mod cli;
mod commands;
mod config;
mod maze;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use pathweave_core::error::{ExitCode as PathweaveExitCode, PathweaveError};
use pathweave_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json_errors(&err) => {
            let error = usage_error(&err);
            eprintln!("{}", error.to_json());
            return ExitCode::from(error.exit_code() as u8);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(PathweaveExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// A failed parse never reaches `Cli.format`, so look for `--format json`
/// in the raw arguments. Help and version output stay with clap.
fn wants_json_errors(err: &clap::Error) -> bool {
    use clap::error::ErrorKind;

    !matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        && argv_requests_json(env::args().skip(1))
}

fn usage_error(err: &clap::Error) -> PathweaveError {
    use clap::error::ErrorKind;

    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::MissingSubcommand
        | ErrorKind::ArgumentConflict => PathweaveError::UsageError(err.to_string()),
        _ => PathweaveError::Other(err.to_string()),
    }
}

fn argv_requests_json(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().is_some_and(|value| value == "json") => return true,
            _ => {}
        }
    }
    false
}
