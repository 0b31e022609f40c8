//! `pathweave levels` command - cells reached on each traversal level

use pathweave_core::{AcyclicTraversal, Result};
use serde::Serialize;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::dispatch::MazeContext;
use crate::commands::emit;
use crate::maze::Position;

#[derive(Debug, Serialize)]
pub struct LevelSummary {
    pub level: usize,
    pub size: usize,
    pub cells: Vec<Position>,
}

#[derive(Debug, Serialize)]
pub struct LevelsReport {
    pub from: Position,
    pub levels: Vec<LevelSummary>,
    /// Whether `--max-levels` cut the traversal short
    pub truncated: bool,
}

pub fn execute(cli: &Cli, context: &MazeContext, max_levels: Option<usize>) -> Result<()> {
    let mut traversal = AcyclicTraversal::new(&context.maze, context.start);
    let limit = max_levels.unwrap_or(usize::MAX);

    let levels: Vec<LevelSummary> = traversal
        .by_ref()
        .take(limit)
        .map(|level| {
            let mut cells: Vec<Position> = level.nodes_on_level.into_iter().collect();
            cells.sort();
            LevelSummary {
                level: level.level,
                size: cells.len(),
                cells,
            }
        })
        .collect();
    let truncated = levels.len() == limit && traversal.next().is_some();
    debug!(levels = levels.len(), truncated, "levels");

    let report = LevelsReport {
        from: context.start,
        levels,
        truncated,
    };

    emit(cli, &report, || {
        for level in &report.levels {
            println!("level {}: {} cells", level.level, level.size);
        }
        if report.truncated && !cli.quiet {
            println!("(stopped after {} levels)", report.levels.len());
        }
    })
}
