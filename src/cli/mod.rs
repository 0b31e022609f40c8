//! CLI argument parsing for pathweave
//!
//! Global flags: --config, --format, --quiet, --verbose, --log-level, --log-json

pub mod output;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Algorithm;
pub use output::OutputFormat;

/// Pathweave - shortest paths and traversals over text mazes
#[derive(Parser, Debug)]
#[command(name = "pathweave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (default: ./pathweave.toml when present)
    #[arg(long, global = true, env = "PATHWEAVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Log search progress at debug level
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Maze file and the markers to search between
#[derive(Args, Debug, Clone)]
pub struct MazeArgs {
    /// Maze text file
    pub maze: PathBuf,

    /// Start marker (default from config: 'S')
    #[arg(long)]
    pub from: Option<char>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a shortest path between two markers
    Path {
        #[command(flatten)]
        maze: MazeArgs,

        /// Goal marker (default from config: 'E')
        #[arg(long)]
        to: Option<char>,

        /// Search engine to use
        #[arg(long, short, value_enum)]
        algorithm: Option<Algorithm>,

        /// Give up after this many A* steps
        #[arg(long)]
        limit_steps: Option<usize>,
    },

    /// List every shortest path between two markers
    AllPaths {
        #[command(flatten)]
        maze: MazeArgs,

        /// Goal marker (default from config: 'E')
        #[arg(long)]
        to: Option<char>,
    },

    /// Show the distance from the start to every reachable cell
    Distances {
        #[command(flatten)]
        maze: MazeArgs,
    },

    /// Show the cells reached on each traversal level
    Levels {
        #[command(flatten)]
        maze: MazeArgs,

        /// Stop after this many levels
        #[arg(long)]
        max_levels: Option<usize>,
    },
}
