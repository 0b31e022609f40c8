//! Integration tests for the pathweave CLI
//!
//! These tests run the pathweave binary against maze files in a temp dir.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for pathweave
fn pathweave() -> Command {
    cargo_bin_cmd!("pathweave")
}

const MAZE: &str = "\
#####
#..E#   #####
#...#   #...#
#.#.#####.#.#####
#S#.......*....Z#
#################
";

const COSTS: &str = "[maze.costs]\n\"*\" = 10\n";

/// Temp dir holding `maze.txt`
fn setup_maze(text: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("maze.txt");
    fs::write(&path, text).unwrap();
    (dir, path)
}

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("pathweave.toml");
    fs::write(&path, content).unwrap();
    path
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    pathweave()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathweave"))
        .stdout(predicate::str::contains("path"))
        .stdout(predicate::str::contains("all-paths"))
        .stdout(predicate::str::contains("distances"))
        .stdout(predicate::str::contains("levels"));
}

#[test]
fn test_version_flag() {
    pathweave()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathweave"));
}

// ============================================================================
// path
// ============================================================================

#[test]
fn test_path_default_markers() {
    let (dir, maze) = setup_maze(MAZE);
    pathweave()
        .current_dir(dir.path())
        .arg("path")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 5"))
        .stdout(predicate::str::contains("steps: 5"))
        .stdout(predicate::str::contains("path: (4, 1) -> (3, 1)"));
}

#[test]
fn test_path_uses_configured_costs() {
    let (dir, maze) = setup_maze(MAZE);

    pathweave()
        .current_dir(dir.path())
        .args(["path", "--to", "Z"])
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 18"));

    // Discovered from the working directory
    write_config(dir.path(), COSTS);
    pathweave()
        .current_dir(dir.path())
        .args(["path", "--to", "Z"])
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 22"));
}

#[test]
fn test_path_every_algorithm_json() {
    let (dir, maze) = setup_maze(MAZE);
    let config = write_config(dir.path(), COSTS);

    for (algorithm, distance) in [("dijkstra", 22), ("astar", 22), ("bfs", 27)] {
        let json = json_stdout(
            pathweave()
                .arg("--config")
                .arg(&config)
                .args(["--format", "json", "path", "--to", "Z", "--algorithm", algorithm])
                .arg(&maze),
        );
        assert_eq!(json["found"], true, "{algorithm}");
        assert_eq!(json["algorithm"], algorithm);
        assert_eq!(json["distance"], distance, "{algorithm}");
        assert_eq!(json["from"]["row"], 4);
        assert_eq!(json["from"]["col"], 1);
    }

    let dfs = json_stdout(
        pathweave()
            .args(["--format", "json", "path", "--algorithm", "dfs"])
            .arg(&maze),
    );
    assert_eq!(dfs["found"], true);
    assert_eq!(dfs["path"][0]["row"], 4);
}

#[test]
fn test_path_algorithm_from_config() {
    let (dir, maze) = setup_maze(MAZE);
    write_config(dir.path(), "[search]\nalgorithm = \"bfs\"\n");
    let json = json_stdout(
        pathweave()
            .current_dir(dir.path())
            .args(["--format", "json", "path"])
            .arg(&maze),
    );
    assert_eq!(json["algorithm"], "bfs");
}

#[test]
fn test_path_limit_steps_gives_up() {
    let (_dir, maze) = setup_maze(MAZE);
    let json = json_stdout(
        pathweave()
            .args(["--format", "json", "path", "--to", "Z"])
            .args(["--algorithm", "astar", "--limit-steps", "3"])
            .arg(&maze),
    );
    assert_eq!(json["found"], false);
    assert!(json["distance"].is_null());
}

#[test]
fn test_path_unreachable_goal_is_not_an_error() {
    let (_dir, maze) = setup_maze("S#E\n");
    pathweave()
        .arg("path")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("no path from 'S' to 'E'"));

    let json = json_stdout(pathweave().args(["--format", "json", "path"]).arg(&maze));
    assert_eq!(json["found"], false);
    assert_eq!(json["path"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_path_custom_markers() {
    let (_dir, maze) = setup_maze("A..B\n");
    pathweave()
        .args(["path", "--from", "A", "--to", "B"])
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 3"));
}

// ============================================================================
// all-paths
// ============================================================================

#[test]
fn test_all_paths_lists_every_tie() {
    let (_dir, maze) = setup_maze(MAZE);
    pathweave()
        .arg("all-paths")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("distance: 5"))
        .stdout(predicate::str::contains("paths: 3"))
        .stdout(predicate::str::contains("  3. (4, 1)"));

    let json = json_stdout(pathweave().args(["--format", "json", "all-paths"]).arg(&maze));
    assert_eq!(json["count"], 3);
    let paths = json["paths"].as_array().unwrap();
    assert!(paths.iter().all(|p| p.as_array().map(Vec::len) == Some(6)));
}

#[test]
fn test_all_paths_quiet_omits_paths() {
    let (_dir, maze) = setup_maze(MAZE);
    pathweave()
        .args(["--quiet", "all-paths"])
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("paths: 3"))
        .stdout(predicate::str::contains("1. ").not());
}

#[test]
fn test_all_paths_with_free_cells_terminates() {
    let (dir, maze) = setup_maze(MAZE);
    write_config(dir.path(), "[maze.costs]\n\".\" = 0\n");

    let json = json_stdout(
        pathweave()
            .current_dir(dir.path())
            .args(["--format", "json", "all-paths"])
            .arg(&maze)
            .timeout(Duration::from_secs(20)),
    );
    // Only entering `E` costs anything
    assert_eq!(json["found"], true);
    assert_eq!(json["distance"], 1);
    let paths = json["paths"].as_array().unwrap();
    assert!(!paths.is_empty());
    for path in paths {
        let cells = path.as_array().unwrap();
        assert_eq!(cells.first().map(|c| &c["row"]), Some(&serde_json::json!(4)));
        assert_eq!(cells.last().map(|c| &c["row"]), Some(&serde_json::json!(1)));
        assert_eq!(cells.last().map(|c| &c["col"]), Some(&serde_json::json!(3)));
    }
}

// ============================================================================
// distances
// ============================================================================

#[test]
fn test_distances_counts_reachable_cells() {
    let (dir, maze) = setup_maze(MAZE);
    write_config(dir.path(), COSTS);

    pathweave()
        .current_dir(dir.path())
        .arg("distances")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("reachable: 27"))
        .stdout(predicate::str::contains("farthest: 22"));

    let json = json_stdout(
        pathweave()
            .current_dir(dir.path())
            .args(["--format", "json", "distances"])
            .arg(&maze),
    );
    assert_eq!(json["reachable"], 27);
    assert_eq!(json["cells"].as_array().map(Vec::len), Some(27));
    assert_eq!(json["cells"][0]["row"], 1);
    assert_eq!(json["cells"][0]["distance"], 3);
}

// ============================================================================
// levels
// ============================================================================

#[test]
fn test_levels_of_open_room() {
    let (_dir, maze) = setup_maze("S..\n...\n...\n");
    pathweave()
        .arg("levels")
        .arg(&maze)
        .assert()
        .success()
        .stdout(predicate::str::contains("level 0: 1 cells"))
        .stdout(predicate::str::contains("level 2: 3 cells"))
        .stdout(predicate::str::contains("level 4: 1 cells"))
        .stdout(predicate::str::contains("level 5").not());
}

#[test]
fn test_levels_max_levels_truncates() {
    let (_dir, maze) = setup_maze("S..\n...\n...\n");
    let json = json_stdout(
        pathweave()
            .args(["--format", "json", "levels", "--max-levels", "2"])
            .arg(&maze),
    );
    assert_eq!(json["levels"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["truncated"], true);
    assert_eq!(json["levels"][1]["size"], 2);
}

// ============================================================================
// Errors and exit codes
// ============================================================================

#[test]
fn test_missing_marker_exit_code_3() {
    let (_dir, maze) = setup_maze(MAZE);
    pathweave()
        .args(["path", "--to", "Q"])
        .arg(&maze)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("marker 'Q' not found in maze"));
}

#[test]
fn test_missing_marker_json_envelope() {
    let (_dir, maze) = setup_maze(MAZE);
    let output = pathweave()
        .args(["--format", "json", "levels", "--from", "Q"])
        .arg(&maze)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "marker_not_found");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_empty_maze_exit_code_3() {
    let (_dir, maze) = setup_maze("\n");
    pathweave()
        .arg("distances")
        .arg(&maze)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid maze"));
}

#[test]
fn test_missing_maze_file_exit_code_1() {
    let dir = tempdir().unwrap();
    pathweave()
        .current_dir(dir.path())
        .args(["path", "nope.txt"])
        .assert()
        .code(1);
}

#[test]
fn test_unknown_algorithm_exit_code_2() {
    let (_dir, maze) = setup_maze(MAZE);
    pathweave()
        .args(["path", "--algorithm", "greedy"])
        .arg(&maze)
        .assert()
        .code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    let (_dir, maze) = setup_maze(MAZE);
    pathweave()
        .args(["--format", "invalid", "path"])
        .arg(&maze)
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    let output = pathweave()
        .args(["--format", "json", "path"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_invalid_config_exit_code_2() {
    let (dir, maze) = setup_maze(MAZE);
    write_config(dir.path(), "[maze]\nstart = '#'\n");
    pathweave()
        .current_dir(dir.path())
        .arg("path")
        .arg(&maze)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid maze markers"));
}

#[test]
fn test_overflowing_cell_cost_exit_code_2() {
    let (dir, maze) = setup_maze(MAZE);
    write_config(dir.path(), "[maze.costs]\n\"*\" = 4000000000\n");
    pathweave()
        .current_dir(dir.path())
        .args(["path", "--to", "Z"])
        .arg(&maze)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid maze.costs"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr() {
    let (_dir, maze) = setup_maze(MAZE);
    pathweave()
        .env_remove("PATHWEAVE_LOG")
        .env_remove("RUST_LOG")
        .args(["--verbose", "path"])
        .arg(&maze)
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stdout(predicate::str::contains("parse_args").not());
}

#[test]
fn test_default_log_level_is_quiet() {
    let (_dir, maze) = setup_maze(MAZE);
    pathweave()
        .env_remove("PATHWEAVE_LOG")
        .env_remove("RUST_LOG")
        .arg("path")
        .arg(&maze)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_json_emits_structured_lines() {
    let (_dir, maze) = setup_maze(MAZE);
    let output = pathweave()
        .env_remove("PATHWEAVE_LOG")
        .env_remove("RUST_LOG")
        .args(["--log-level", "debug", "--log-json", "path"])
        .arg(&maze)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("fields").is_some());
}
