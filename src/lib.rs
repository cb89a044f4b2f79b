#![warn(missing_docs)]
//! A logic-only sudoku solver
//!
//! ## Overview
//!
//! This library solves 9×9 sudokus purely by constraint propagation: naked
//! singles, hidden singles and pointing pairs, driven to a fixed point. It
//! never guesses. Puzzles that require backtracking are reported as
//! [`Outcome::Stuck`] with the grid left partially filled, which is a
//! normal result rather than an error.
//!
//! ## Example
//!
//! ```
//! use sudoku_logic::{solve, Grid, Outcome};
//!
//! let puzzle = "\
//! 53__7____
//! 6__195___
//! _98____6_
//! 8___6___3
//! 4__8_3__1
//! 7___2___6
//! _6____28_
//! ___419__5
//! ____8__79";
//!
//! let mut grid = Grid::from_lines("classic", puzzle)?;
//! assert_eq!(solve(&mut grid), Outcome::Solved);
//! assert!(grid.to_string().starts_with("534678912"));
//! # Ok::<(), sudoku_logic::GridParseError>(())
//! ```
//!
//! The [`batch`] module adds the surrounding plumbing: loading a directory
//! of puzzle files, solving them on a worker pool and writing the solutions
//! back out.

pub mod batch;
pub mod board;
pub mod deduce;

mod bitset;
mod errors;

pub use crate::bitset::DigitSet;
pub use crate::board::{Cell, CellState, Digit, Grid};
pub use crate::deduce::{check_solved, solve, Outcome, MAX_PASSES};
pub use crate::errors::{BatchError, GridParseError, InvalidCoordinate};
