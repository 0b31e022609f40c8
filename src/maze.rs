//! Text maze loader
//!
//! A maze is a block of text, one row per line. Every character except the
//! wall is walkable; moves go to the four orthogonal neighbours and cost
//! whatever `[maze.costs]` assigns to the entered cell (1 by default).

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use pathweave_core::{Graph, Heuristic, PathweaveError, Result};
use serde::Serialize;

use crate::config::MazeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(&self, other: &Position) -> u32 {
        let distance = self.row.abs_diff(other.row) + self.col.abs_diff(other.col);
        u32::try_from(distance).unwrap_or(u32::MAX)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone)]
pub struct Maze {
    rows: Vec<Vec<char>>,
    wall: char,
    costs: HashMap<char, u32>,
    /// Cheapest possible step, scales the Manhattan estimate
    min_cost: u32,
}

impl Maze {
    /// Parse maze text. Short rows are padded with wall cells.
    pub fn parse(text: &str, config: &MazeConfig) -> Result<Self> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(PathweaveError::invalid_maze("maze has no cells"));
        }
        for row in &mut rows {
            row.resize(width, config.wall);
        }

        let min_cost = config.costs.values().copied().chain([1]).min().unwrap_or(1);
        check_cost_bound(&rows, config)?;
        Ok(Self {
            rows,
            wall: config.wall,
            costs: config.costs.clone(),
            min_cost,
        })
    }

    pub fn load(path: &Path, config: &MazeConfig) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(&text, config)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, position: Position) -> Option<char> {
        self.rows.get(position.row)?.get(position.col).copied()
    }

    pub fn is_wall(&self, position: Position) -> bool {
        self.get(position).is_none_or(|cell| cell == self.wall)
    }

    /// First cell holding `marker`, in reading order
    pub fn find(&self, marker: char) -> Result<Position> {
        self.rows
            .iter()
            .enumerate()
            .find_map(|(row, cells)| {
                cells
                    .iter()
                    .position(|&cell| cell == marker)
                    .map(|col| Position::new(row, col))
            })
            .ok_or(PathweaveError::MarkerNotFound { marker })
    }

    fn entering_cost(&self, cell: char) -> u32 {
        self.costs.get(&cell).copied().unwrap_or(1)
    }
}

/// Reject costs high enough that a simple path, or an A* estimate on top of
/// one, could overflow `u32`
fn check_cost_bound(rows: &[Vec<char>], config: &MazeConfig) -> Result<()> {
    let max_cost = config.costs.values().copied().chain([1]).max().unwrap_or(1);
    let open = rows.iter().flatten().filter(|&&cell| cell != config.wall).count();
    let width = rows.first().map_or(0, Vec::len);
    let steps = open + rows.len() + width;
    let fits = u32::try_from(steps)
        .ok()
        .and_then(|steps| steps.checked_mul(max_cost))
        .is_some();
    if fits {
        Ok(())
    } else {
        Err(PathweaveError::invalid_value(
            "maze.costs",
            format!("a cost of {max_cost} over {open} open cells overflows the path cost"),
        ))
    }
}

impl Graph<Position> for Maze {
    type Cost = u32;

    fn neighbors(&self, position: &Position) -> Vec<Position> {
        let Position { row, col } = *position;
        [
            row.checked_sub(1).map(|r| Position::new(r, col)),
            Some(Position::new(row, col + 1)),
            Some(Position::new(row + 1, col)),
            col.checked_sub(1).map(|c| Position::new(row, c)),
        ]
        .into_iter()
        .flatten()
        .filter(|next| !self.is_wall(*next))
        .collect()
    }

    fn cost(&self, _from: &Position, to: &Position) -> u32 {
        self.get(*to).map_or(1, |cell| self.entering_cost(cell))
    }
}

impl Heuristic<Position> for Maze {
    fn cost_estimation(&self, from: &Position, to: &Position) -> u32 {
        from.manhattan(to).saturating_mul(self.min_cost)
    }
}
