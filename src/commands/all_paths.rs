//! `pathweave all-paths` command - every shortest path between two markers

use pathweave_core::{Dijkstra, Result};
use serde::Serialize;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::dispatch::MazeContext;
use crate::commands::{emit, format_path};
use crate::maze::Position;

#[derive(Debug, Serialize)]
pub struct AllPathsReport {
    pub from: Position,
    pub to: Position,
    pub found: bool,
    pub distance: Option<u32>,
    pub count: usize,
    pub paths: Vec<Vec<Position>>,
}

pub fn execute(cli: &Cli, context: &MazeContext, to: char) -> Result<()> {
    let goal = context.maze.find(to)?;
    let result = Dijkstra::new(&context.maze, context.start).search_all_to(&goal);

    // Sorted so output is stable across runs
    let mut paths = result.paths();
    paths.sort();
    debug!(count = paths.len(), "all_paths");

    let report = AllPathsReport {
        from: context.start,
        to: goal,
        found: result.success(),
        distance: result.distance_to_start(),
        count: paths.len(),
        paths,
    };

    emit(cli, &report, || {
        let Some(distance) = report.distance else {
            println!("no path from '{}' to '{}'", context.from, to);
            return;
        };
        println!("distance: {}", distance);
        println!("paths: {}", report.count);
        if !cli.quiet {
            for (index, path) in report.paths.iter().enumerate() {
                println!("{:>3}. {}", index + 1, format_path(path));
            }
        }
    })
}
