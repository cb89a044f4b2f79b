//! The constraint-propagation engine
//!
//! Deductions are stateless operations on a mutably borrowed [`Grid`]: the
//! candidate engine, the three elimination techniques, the assignment
//! propagator and the fixed-point loop that drives them. No technique ever
//! guesses; puzzles that need search come back as [`Outcome::Stuck`].

mod assign;
mod candidates;
mod hidden_singles;
mod naked_singles;
mod pointing_pairs;

use crate::bitset::DigitSet;
use crate::board::{Block, Cell, Col, Digit, Grid, Row};
use log::debug;

pub(crate) use self::assign::assign;
pub(crate) use self::candidates::refresh_candidates;
pub(crate) use self::hidden_singles::find_hidden_singles;
pub(crate) use self::naked_singles::find_naked_singles;
pub(crate) use self::pointing_pairs::find_pointing_pairs;

/// Terminal state of a solve run.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Outcome {
    /// Every row, column and box is a permutation of 1..=9.
    Solved,
    /// No supported technique can make further progress; the grid is left
    /// partially filled. This is a reportable result, not a failure.
    Stuck,
}

/// Upper bound on solve passes. Every productive pass assigns a value or
/// removes a candidate, and 81 cells bound the assignments, so a run that
/// exhausts the cap cannot be making real progress anymore.
pub const MAX_PASSES: u32 = 81;

/// Drives the three techniques to a fixed point.
///
/// Each pass refreshes the candidates, applies naked singles to a fixed
/// point, then pointing pairs and hidden singles once per cell, and finally
/// runs the completion check. The loop ends with [`Outcome::Solved`] when
/// the check passes, with [`Outcome::Stuck`] after a pass that neither
/// assigned a value nor removed a candidate, and treats an exhausted pass
/// budget the same as stuck.
pub fn solve(grid: &mut Grid) -> Outcome {
    for pass in 1..=MAX_PASSES {
        refresh_candidates(grid);
        let assigned = find_naked_singles(grid);
        let eliminated = find_pointing_pairs(grid);
        let assigned = assigned + find_hidden_singles(grid);
        debug!(
            "{}: pass {}: {} assigned, {} candidates eliminated, {} open",
            grid.name(),
            pass,
            assigned,
            eliminated,
            grid.empty_cells().count(),
        );

        if check_solved(grid) {
            return Outcome::Solved;
        }
        if assigned == 0 && eliminated == 0 {
            return Outcome::Stuck;
        }
    }
    debug!("{}: pass budget exhausted", grid.name());
    Outcome::Stuck
}

/// Checks whether every row, column and box is an exact permutation of
/// 1..=9 and, if so, sets the grid's one-way solved flag.
///
/// A region with all nine digits but a duplicate among them is rejected;
/// containment alone is not enough.
pub fn check_solved(grid: &mut Grid) -> bool {
    if grid.solved() {
        return true;
    }
    let rows = Row::all().map(Row::cells);
    let cols = Col::all().map(Col::cells);
    let blocks = Block::all().map(Block::cells);
    if rows.chain(cols).chain(blocks).all(|region| is_permutation(grid, region)) {
        grid.mark_solved();
        return true;
    }
    false
}

fn is_permutation(grid: &Grid, region: [Cell; 9]) -> bool {
    let mut seen = DigitSet::NONE;
    for cell in region {
        match grid.digit(cell) {
            None => return false,
            Some(digit) if seen.contains(digit) => return false,
            Some(digit) => seen.insert(digit),
        }
    }
    true
}

pub(crate) fn candidate_count(
    grid: &Grid,
    cells: impl IntoIterator<Item = Cell>,
    digit: Digit,
) -> u32 {
    cells
        .into_iter()
        .filter(|&cell| grid.candidates(cell).contains(digit))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str = "\
534678912
672195348
198342567
859761423
426853791
713924856
961537284
287419635
345286179";

    #[test]
    fn accepts_a_complete_valid_grid() {
        let mut grid = Grid::from_lines("done", SOLVED).unwrap();
        assert!(!grid.solved());
        assert!(check_solved(&mut grid));
        assert!(grid.solved());
    }

    #[test]
    fn rejects_incomplete_grids() {
        let text = SOLVED.replacen('5', "_", 1);
        let mut grid = Grid::from_lines("hole", &text).unwrap();
        assert!(!check_solved(&mut grid));
        assert!(!grid.solved());
    }

    #[test]
    fn rejects_duplicates_even_with_all_digits_present() {
        // (0,1) := 5 duplicates the 5 at (0,0)
        let text = SOLVED.replacen('3', "5", 1);
        let mut grid = Grid::from_lines("dup", &text).unwrap();
        assert!(!check_solved(&mut grid));
    }

    #[test]
    fn region_values_stay_pairwise_distinct_throughout_a_solve() {
        let distinct = |grid: &Grid| {
            let rows = Row::all().map(Row::cells);
            let cols = Col::all().map(Col::cells);
            let blocks = Block::all().map(Block::cells);
            rows.chain(cols).chain(blocks).all(|region| {
                let mut seen = DigitSet::NONE;
                region.into_iter().filter_map(|cell| grid.digit(cell)).all(|digit| {
                    let fresh = !seen.contains(digit);
                    seen.insert(digit);
                    fresh
                })
            })
        };

        let puzzle = "\
53__7____
6__195___
_98____6_
8___6___3
4__8_3__1
7___2___6
_6____28_
___419__5
____8__79";
        let mut grid = Grid::from_lines("classic", puzzle).unwrap();
        assert!(distinct(&grid));
        // run the pass stages by hand, checking after each mutation stage
        for _ in 0..4 {
            refresh_candidates(&mut grid);
            find_naked_singles(&mut grid);
            assert!(distinct(&grid));
            find_pointing_pairs(&mut grid);
            assert!(distinct(&grid));
            find_hidden_singles(&mut grid);
            assert!(distinct(&grid));
        }
    }
}
