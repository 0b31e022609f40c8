//! Command dispatch logic for pathweave

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use pathweave_core::{trace_time, Result};
use tracing::debug;

use crate::cli::{Cli, Commands, MazeArgs};
use crate::commands;
use crate::config::Config;
use crate::maze::{Maze, Position};

/// A loaded maze and the resolved start cell
pub struct MazeContext {
    pub maze: Maze,
    pub start: Position,
    pub from: char,
}

impl MazeContext {
    fn load(args: &MazeArgs, config: &Config, start: Instant) -> Result<Self> {
        let maze = Maze::load(&args.maze, &config.maze)?;
        trace_time!(start, "load_maze", rows = maze.height(), cols = maze.width());
        let from = args.from.unwrap_or(config.maze.start);
        Ok(Self {
            start: maze.find(from)?,
            maze,
            from,
        })
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = Config::resolve(cli.config.as_deref(), &cwd)?;
    debug!(elapsed = ?start.elapsed(), algorithm = %config.search.algorithm, "load_config");

    match &cli.command {
        Commands::Path {
            maze,
            to,
            algorithm,
            limit_steps,
        } => {
            let context = MazeContext::load(maze, &config, start)?;
            let options = commands::path::PathOptions {
                to: to.unwrap_or(config.maze.goal),
                algorithm: algorithm.unwrap_or(config.search.algorithm),
                limit_steps: limit_steps.or(config.search.limit_steps),
            };
            commands::path::execute(cli, &context, &options)
        }

        Commands::AllPaths { maze, to } => {
            let context = MazeContext::load(maze, &config, start)?;
            commands::all_paths::execute(cli, &context, to.unwrap_or(config.maze.goal))
        }

        Commands::Distances { maze } => {
            let context = MazeContext::load(maze, &config, start)?;
            commands::distances::execute(cli, &context)
        }

        Commands::Levels { maze, max_levels } => {
            let context = MazeContext::load(maze, &config, start)?;
            commands::levels::execute(cli, &context, *max_levels)
        }
    }
}
