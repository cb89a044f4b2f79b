use crate::bitset::DigitSet;
use crate::board::{Cell, Grid};

/// Recomputes the candidate set of every empty cell from its row, column and
/// box: `{1..9} − already placed digits`. Filled cells carry no candidates.
///
/// The first call seeds a freshly constructed grid. Later calls only
/// intersect the stored set with the newly derived one, so digits a
/// technique has eliminated stay eliminated and calling this repeatedly
/// without an intervening assignment changes nothing.
pub(crate) fn refresh_candidates(grid: &mut Grid) {
    let seeded = grid.candidates_seeded();
    for cell in Cell::all() {
        if !grid.is_empty(cell) {
            continue;
        }
        let used = grid.region_digits(cell.row().cells())
            | grid.region_digits(cell.col().cells())
            | grid.region_digits(cell.block().cells());
        let derived = DigitSet::ALL.without(used);
        let next = match seeded {
            true => grid.candidates(cell) & derived,
            false => derived,
        };
        grid.set_candidates(cell, next);
    }
    grid.mark_candidates_seeded();
}
