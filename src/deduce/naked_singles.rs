use crate::board::{Cell, Grid};
use crate::deduce::assign;

/// Assigns every cell whose candidate set has exactly one member.
///
/// An assignment can expose new singles among its peers, so the scan is
/// repeated until a complete pass over the grid assigns nothing. Returns the
/// total number of assignments made.
pub(crate) fn find_naked_singles(grid: &mut Grid) -> u32 {
    let mut assigned = 0;
    loop {
        let mut assigned_this_pass = 0;
        for cell in Cell::all() {
            if let Some(digit) = grid.candidates(cell).unique() {
                assign(grid, cell, digit);
                assigned_this_pass += 1;
            }
        }
        if assigned_this_pass == 0 {
            return assigned;
        }
        assigned += assigned_this_pass;
    }
}
