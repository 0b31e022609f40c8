//! Shared fixtures for unit tests

use crate::graph::{graph_fn, Heuristic};

pub(crate) type Point = (i32, i32);

/// Walled maze with a costly teleporter cell `*`. `E` is 5 steps from `S`
/// along three equally short routes; `Z` is 22 away, because walking
/// around the `*` is cheaper than stepping on it.
pub(crate) const MAZE: &str = "\
#####
#..E#   #####
#...#   #...#
#.#.#####.#.#####
#S#.......*....Z#
#################";

pub(crate) struct Maze {
    rows: Vec<Vec<char>>,
}

impl Maze {
    pub(crate) fn parse(text: &str) -> Self {
        Self {
            rows: text.lines().map(|line| line.chars().collect()).collect(),
        }
    }

    /// Cell at `(row, col)`; anything outside the text is wall
    pub(crate) fn get(&self, (row, col): Point) -> char {
        if row < 0 || col < 0 {
            return '#';
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or('#')
    }

    pub(crate) fn find(&self, marker: char) -> Point {
        for (row, cells) in self.rows.iter().enumerate() {
            if let Some(col) = cells.iter().position(|c| *c == marker) {
                return (row as i32, col as i32);
            }
        }
        panic!("marker {marker} not in maze");
    }

    pub(crate) fn open_neighbors(&self, (row, col): Point) -> Vec<Point> {
        [(row - 1, col), (row, col + 1), (row + 1, col), (row, col - 1)]
            .into_iter()
            .filter(|p| self.get(*p) != '#')
            .collect()
    }

    /// Entering `*` costs 10, any other cell 1; Manhattan distance estimate
    pub(crate) fn graph(&self) -> impl Heuristic<Point, Cost = u32> + '_ {
        graph_fn(move |p: &Point| self.open_neighbors(*p))
            .with_cost(move |_: &Point, to: &Point| if self.get(*to) == '*' { 10u32 } else { 1 })
            .with_estimation(|from: &Point, to: Option<&Point>| {
                to.map_or(0, |to| from.0.abs_diff(to.0) + from.1.abs_diff(to.1))
            })
    }
}

/// `n` x `n` open grid, 4-neighborhood, unit costs
pub(crate) fn open_grid(n: i32) -> impl Heuristic<Point, Cost = u32> {
    graph_fn(move |&(r, c): &Point| {
        [(r - 1, c), (r, c + 1), (r + 1, c), (r, c - 1)]
            .into_iter()
            .filter(|&(r, c)| (0..n).contains(&r) && (0..n).contains(&c))
            .collect()
    })
    .with_estimation(|from: &Point, to: Option<&Point>| {
        to.map_or(0, |to| from.0.abs_diff(to.0) + from.1.abs_diff(to.1))
    })
}
