//! Errors reported while loading puzzles or indexing the board
use std::io;
use std::path::PathBuf;

/// Error for the checked region accessors on [`Grid`](crate::Grid).
///
/// All indices the solver derives internally stay inside the fixed 9×9
/// bounds, so hitting this from within the crate would be a defect, not a
/// recoverable condition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("index {0} is outside the 9x9 grid")]
pub struct InvalidCoordinate(pub u8);

/// Error for [`Grid::from_lines`](crate::Grid::from_lines).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridParseError {
    /// A cell character that is neither `'1'..='9'` nor an accepted filler.
    #[error("row {row} contains invalid character {ch:?}")]
    InvalidCharacter {
        /// Row index, 0..=8 from the top.
        row: u8,
        /// The offending character.
        ch: char,
    },
    /// A row with more or fewer than 9 cells.
    #[error("row {row} has {found} cells instead of 9")]
    InvalidRowLength {
        /// Row index, 0..=8 from the top.
        row: u8,
        /// Number of cells found in that row.
        found: usize,
    },
    /// Input with more or fewer than 9 rows.
    #[error("puzzle has {0} rows instead of 9")]
    WrongRowCount(usize),
}

/// Error for [`solve_directory`](crate::batch::solve_directory).
///
/// Failures on individual puzzles are logged and counted in the
/// [`BatchSummary`](crate::batch::BatchSummary) instead; only problems with
/// the directories themselves abort a batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The puzzle directory could not be read.
    #[error("failed to read puzzle directory {path}: {source}")]
    ReadDir {
        /// The directory that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The solution directory could not be created.
    #[error("failed to create solution directory {path}: {source}")]
    CreateSolutionDir {
        /// The directory that was being created.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}
