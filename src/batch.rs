//! Batch solving of puzzle files
//!
//! Grids are fully independent of one another, so the files of a batch are
//! solved on a rayon worker pool with no synchronization between puzzles.

use crate::deduce::{solve, Outcome};
use crate::errors::BatchError;
use crate::Grid;
use log::{error, info, warn};
use rayon::prelude::*;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Per-puzzle results of a [`solve_directory`] run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Puzzles solved completely.
    pub solved: usize,
    /// Puzzles the supported techniques could not finish.
    pub stuck: usize,
    /// Puzzles that could not be read, parsed or written back.
    pub failed: usize,
}

/// Solves every puzzle file in `puzzles` and writes each result to
/// `solutions/<name>.sln.txt`.
///
/// Files whose name contains `"sln"` are skipped, so a batch can be re-run
/// over a directory that already holds its own solutions. Unreadable or
/// malformed puzzles are logged and counted as failed without aborting the
/// batch. Stuck puzzles are written out partially filled.
pub fn solve_directory(puzzles: &Path, solutions: &Path) -> Result<BatchSummary, BatchError> {
    let entries = fs::read_dir(puzzles).map_err(|source| BatchError::ReadDir {
        path: puzzles.to_owned(),
        source,
    })?;
    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && !file_name(path).contains("sln"))
        .collect();
    files.sort();

    fs::create_dir_all(solutions).map_err(|source| BatchError::CreateSolutionDir {
        path: solutions.to_owned(),
        source,
    })?;

    let summary = files
        .par_iter()
        .map(|path| solve_file(path, solutions))
        .fold(BatchSummary::default, |mut summary, result| {
            match result {
                Some(Outcome::Solved) => summary.solved += 1,
                Some(Outcome::Stuck) => summary.stuck += 1,
                None => summary.failed += 1,
            }
            summary
        })
        .reduce(BatchSummary::default, |a, b| BatchSummary {
            solved: a.solved + b.solved,
            stuck: a.stuck + b.stuck,
            failed: a.failed + b.failed,
        });
    Ok(summary)
}

/// Loads, solves and writes back a single puzzle.
/// `None` means the file never made it through a full load/solve/store.
fn solve_file(path: &Path, solutions: &Path) -> Option<Outcome> {
    let name = path
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("puzzle")
        .to_owned();
    info!("reading sudoku puzzle {name}");

    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            error!("failed to read {}: {err}", path.display());
            return None;
        }
    };
    let mut grid = match Grid::from_lines(name, &text) {
        Ok(grid) => grid,
        Err(err) => {
            error!("failed to parse {}: {err}", path.display());
            return None;
        }
    };

    let outcome = solve(&mut grid);
    match outcome {
        Outcome::Solved => info!("{} solved", grid.name()),
        Outcome::Stuck => warn!(
            "{} is not solvable by the supported techniques, {} cells left open",
            grid.name(),
            grid.empty_cells().count(),
        ),
    }

    let out_path = solutions.join(format!("{}.sln.txt", grid.name()));
    if let Err(err) = fs::write(&out_path, format!("{grid}\n")) {
        error!("failed to save solution for {}: {err}", grid.name());
        return None;
    }
    Some(outcome)
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(OsStr::to_str).unwrap_or_default()
}
