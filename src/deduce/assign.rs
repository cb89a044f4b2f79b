use crate::board::{Cell, Digit, Grid};

/// Commits `digit` to `cell` and removes it from the candidates of every
/// other cell sharing the cell's row, column or box.
///
/// Every technique routes its assignments through here; this is the single
/// point that keeps candidate state consistent with placed values.
pub(crate) fn assign(grid: &mut Grid, cell: Cell, digit: Digit) {
    debug_assert!(grid.is_empty(cell));
    grid.place(cell, digit);

    let peers = cell
        .row()
        .cells()
        .into_iter()
        .chain(cell.col().cells())
        .chain(cell.block().cells());
    for peer in peers {
        if peer == cell || !grid.is_empty(peer) {
            continue;
        }
        let mut candidates = grid.candidates(peer);
        candidates.remove(digit);
        grid.set_candidates(peer, candidates);
    }
}
