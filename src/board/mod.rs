//! Types for cells, digits and positions on a sudoku board
mod cell_state;
mod digit;
mod grid;
mod positions;

pub use self::{
    cell_state::CellState,
    digit::Digit,
    grid::Grid,
    positions::{Block, Cell, Col, Row},
};
