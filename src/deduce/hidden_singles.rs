use crate::board::{Cell, Grid};
use crate::deduce::assign;

/// Assigns digits that are confined to a single cell within one of their
/// regions, even when that cell still has several candidates of its own.
///
/// Cells are visited in row-major order; per cell, each candidate digit is
/// tested against the cell's row, column and box, in that priority order.
/// The frequency count runs over the candidate sets of all nine region
/// cells, the cell under test included. The first match is assigned and the
/// scan moves on to the next cell. Assignments propagate immediately, so
/// later cells in the same pass observe the narrowed candidate state.
/// Returns the number of assignments made.
pub(crate) fn find_hidden_singles(grid: &mut Grid) -> u32 {
    let mut assigned = 0;
    for cell in Cell::all() {
        if !grid.is_empty(cell) {
            continue;
        }
        let regions = [cell.row().cells(), cell.col().cells(), cell.block().cells()];
        'digits: for digit in grid.candidates(cell) {
            for region in regions {
                let holders = region
                    .iter()
                    .filter(|&&other| grid.candidates(other).contains(digit))
                    .count();
                if holders == 1 {
                    assign(grid, cell, digit);
                    assigned += 1;
                    break 'digits;
                }
            }
        }
    }
    assigned
}
