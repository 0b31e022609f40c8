//! CLI commands for pathweave

pub mod all_paths;
pub mod dispatch;
pub mod distances;
pub mod levels;
pub mod path;

use pathweave_core::Result;

use crate::cli::{Cli, OutputFormat};
use crate::maze::Position;

/// Print `report` as pretty JSON, or run `human` for the human format
pub fn emit<T: serde::Serialize>(cli: &Cli, report: &T, human: impl FnOnce()) -> Result<()> {
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
        OutputFormat::Human => human(),
    }
    Ok(())
}

/// `(r, c) -> (r, c) -> ...`
pub fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
