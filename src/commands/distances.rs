//! `pathweave distances` command - cost from the start to every reachable cell

use std::collections::HashMap;

use pathweave_core::{Dijkstra, Result};
use serde::Serialize;

use crate::cli::Cli;
use crate::commands::dispatch::MazeContext;
use crate::commands::emit;
use crate::maze::{Maze, Position};

#[derive(Debug, Serialize)]
pub struct CellDistance {
    #[serde(flatten)]
    pub position: Position,
    pub distance: u32,
}

#[derive(Debug, Serialize)]
pub struct DistancesReport {
    pub from: Position,
    pub reachable: usize,
    pub farthest: Option<u32>,
    pub cells: Vec<CellDistance>,
}

pub fn execute(cli: &Cli, context: &MazeContext) -> Result<()> {
    let result = Dijkstra::new(&context.maze, context.start).search_exhaustive();

    let mut cells: Vec<CellDistance> = result
        .distance
        .iter()
        .map(|(&position, &distance)| CellDistance { position, distance })
        .collect();
    cells.sort_by_key(|cell| cell.position);

    let report = DistancesReport {
        from: context.start,
        reachable: cells.len(),
        farthest: cells.iter().map(|cell| cell.distance).max(),
        cells,
    };

    emit(cli, &report, || {
        if !cli.quiet {
            print!("{}", render_grid(&context.maze, &result.distance));
        }
        println!("reachable: {}", report.reachable);
        if let Some(farthest) = report.farthest {
            println!("farthest: {}", farthest);
        }
    })
}

/// Maze drawn with each reachable cell replaced by its distance. Columns are
/// padded to the widest distance; unreachable open cells show as blanks.
pub fn render_grid(maze: &Maze, distances: &HashMap<Position, u32>) -> String {
    let width = distances
        .values()
        .map(|d| d.to_string().len())
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    for row in 0..maze.height() {
        let line: Vec<String> = (0..maze.width())
            .map(|col| {
                let position = Position::new(row, col);
                match distances.get(&position) {
                    Some(distance) => format!("{:>width$}", distance),
                    None if maze.is_wall(position) => {
                        let wall = maze.get(position).unwrap_or(' ');
                        wall.to_string().repeat(width)
                    }
                    None => " ".repeat(width),
                }
            })
            .collect();
        out.push_str(line.join(" ").trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MazeConfig;

    #[test]
    fn test_render_grid_pads_to_widest_distance() {
        let maze = Maze::parse("#####\n#S..#\n#####", &MazeConfig::default()).unwrap();
        let distances = HashMap::from([
            (Position::new(1, 1), 0),
            (Position::new(1, 2), 1),
            (Position::new(1, 3), 10),
        ]);
        let grid = render_grid(&maze, &distances);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0], "## ## ## ## ##");
        assert_eq!(lines[1], "##  0  1 10 ##");
    }

    #[test]
    fn test_render_grid_blanks_unreachable_cells() {
        let maze = Maze::parse("S#.", &MazeConfig::default()).unwrap();
        let distances = HashMap::from([(Position::new(0, 0), 0)]);
        assert_eq!(render_grid(&maze, &distances), "0 #\n");
    }
}
