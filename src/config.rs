//! Configuration for pathweave
//!
//! Read from `pathweave.toml` (or the file named by `--config`). Every key is
//! optional; command-line flags override whatever the file sets.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use pathweave_core::{PathweaveError, Result};
use serde::{Deserialize, Serialize};

/// File looked up in the current directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "pathweave.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub maze: MazeConfig,
    pub search: SearchConfig,
}

/// How maze text is interpreted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Impassable cell
    pub wall: char,
    /// Default start marker
    pub start: char,
    /// Default goal marker
    pub goal: char,
    /// Cost of entering a cell, by cell character; anything else costs 1
    pub costs: HashMap<char, u32>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            wall: '#',
            start: 'S',
            goal: 'E',
            costs: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub algorithm: Algorithm,
    /// Cooperative cancellation for A*
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_steps: Option<usize>,
}

/// Engine used by the `path` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Dijkstra,
    Astar,
    Bfs,
    Dfs,
}

impl FromStr for Algorithm {
    type Err = PathweaveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::Astar),
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            other => Err(PathweaveError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => write!(f, "dijkstra"),
            Algorithm::Astar => write!(f, "astar"),
            Algorithm::Bfs => write!(f, "bfs"),
            Algorithm::Dfs => write!(f, "dfs"),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `explicit` if given, else `pathweave.toml` in `dir` if it exists,
    /// else the defaults.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        let discovered: PathBuf = dir.join(CONFIG_FILE_NAME);
        match explicit {
            Some(path) => Self::load(path),
            None if discovered.is_file() => Self::load(&discovered),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let maze = &self.maze;
        if maze.start == maze.wall || maze.goal == maze.wall {
            return Err(PathweaveError::invalid_value(
                "maze markers",
                format!("start and goal must differ from the wall '{}'", maze.wall),
            ));
        }
        if maze.costs.contains_key(&maze.wall) {
            return Err(PathweaveError::invalid_value(
                "maze.costs",
                format!("the wall '{}' cannot have a cost", maze.wall),
            ));
        }
        if self.search.limit_steps == Some(0) {
            return Err(PathweaveError::invalid_value("search.limit_steps", 0));
        }
        Ok(())
    }
}
