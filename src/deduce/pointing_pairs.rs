use crate::board::{Block, Cell, Digit, Grid};
use crate::deduce::candidate_count;

/// Prunes digits that are confined, within a box, to a single row- or
/// column-strip: such a digit must land in that strip, so it cannot appear
/// anywhere else in the full row (or column) outside the box.
///
/// Per empty cell, each candidate digit's occurrence count in the cell's box
/// is compared against its count in the box's aligned row-strip and
/// column-strip. On a confinement (strip count > 1 and equal to the box
/// count) the digit is removed from the row/column cells outside the box,
/// selected by coordinate, and the scan moves on to the next cell. This
/// technique never assigns values. Returns the number of candidates removed.
pub(crate) fn find_pointing_pairs(grid: &mut Grid) -> u32 {
    let mut eliminated = 0;
    for cell in Cell::all() {
        if !grid.is_empty(cell) {
            continue;
        }
        let block = cell.block();
        let box_cells = block.cells();
        let row_strip = block.row_strip(cell.row().get() - block.origin_row());
        let col_strip = block.col_strip(cell.col().get() - block.origin_col());

        for digit in grid.candidates(cell) {
            let in_box = candidate_count(grid, box_cells, digit);

            let in_row_strip = candidate_count(grid, row_strip, digit);
            if in_row_strip > 1 && in_box == in_row_strip {
                let removed = remove_outside_block(grid, cell.row().cells(), block, digit);
                if removed > 0 {
                    eliminated += removed;
                    break;
                }
            }

            let in_col_strip = candidate_count(grid, col_strip, digit);
            if in_col_strip > 1 && in_box == in_col_strip {
                let removed = remove_outside_block(grid, cell.col().cells(), block, digit);
                if removed > 0 {
                    eliminated += removed;
                    break;
                }
            }
        }
    }
    eliminated
}

/// Removes `digit` from the candidates of every cell of `line` whose
/// coordinates fall outside `block`. The exclusion is a coordinate filter;
/// no region collection is ever mutated.
fn remove_outside_block(grid: &mut Grid, line: [Cell; 9], block: Block, digit: Digit) -> u32 {
    let mut removed = 0;
    for cell in line {
        if cell.block() == block {
            continue;
        }
        let candidates = grid.candidates(cell);
        if candidates.contains(digit) {
            let mut narrowed = candidates;
            narrowed.remove(digit);
            grid.set_candidates(cell, narrowed);
            removed += 1;
        }
    }
    removed
}
