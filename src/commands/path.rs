//! `pathweave path` command - one shortest path between two markers
//!
//! Dijkstra and A* minimise total cost; BFS minimises the number of steps;
//! DFS returns the first path it stumbles on.

use std::time::Instant;

use pathweave_core::{depth_first_search, trace_time, AStar, BfsSearch, Dijkstra, Graph, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::Cli;
use crate::commands::dispatch::MazeContext;
use crate::commands::{emit, format_path};
use crate::config::Algorithm;
use crate::maze::{Maze, Position};

pub struct PathOptions {
    pub to: char,
    pub algorithm: Algorithm,
    pub limit_steps: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct PathReport {
    pub algorithm: Algorithm,
    pub from: Position,
    pub to: Position,
    pub found: bool,
    pub distance: Option<u32>,
    pub steps: Option<usize>,
    pub path: Vec<Position>,
}

pub fn execute(cli: &Cli, context: &MazeContext, options: &PathOptions) -> Result<()> {
    let goal = context.maze.find(options.to)?;
    let report = find_path(&context.maze, context.start, goal, options);

    emit(cli, &report, || {
        if !report.found {
            println!("no path from '{}' to '{}'", context.from, options.to);
            return;
        }
        if let Some(distance) = report.distance {
            println!("distance: {}", distance);
        }
        if let Some(steps) = report.steps {
            println!("steps: {}", steps);
        }
        if !cli.quiet {
            println!("path: {}", format_path(&report.path));
        }
    })
}

pub fn find_path(maze: &Maze, from: Position, to: Position, options: &PathOptions) -> PathReport {
    let start = Instant::now();
    if options.limit_steps.is_some() && options.algorithm != Algorithm::Astar {
        warn!(algorithm = %options.algorithm, "limit_steps only applies to astar");
    }

    let path = match options.algorithm {
        Algorithm::Dijkstra => Dijkstra::new(maze, from).search_to(&to).path(),
        Algorithm::Astar => AStar::new(maze, from).search(&to, options.limit_steps).path(),
        Algorithm::Bfs => BfsSearch::run(maze, from, |p| *p == to).path(),
        Algorithm::Dfs => depth_first_search(maze, from, |p| *p == to),
    };
    trace_time!(start, "find_path", nodes = path.len());

    let found = !path.is_empty();
    let distance = found.then(|| path_cost(maze, &path));
    debug!(algorithm = %options.algorithm, found, distance = ?distance, "path_search");
    PathReport {
        algorithm: options.algorithm,
        from,
        to,
        found,
        distance,
        steps: found.then(|| path.len() - 1),
        path,
    }
}

/// Total cost of walking `path` step by step, saturating at `u32::MAX`
fn path_cost(maze: &Maze, path: &[Position]) -> u32 {
    path.windows(2)
        .map(|step| maze.cost(&step[0], &step[1]))
        .fold(0, u32::saturating_add)
}
