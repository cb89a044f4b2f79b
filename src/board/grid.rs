use crate::bitset::DigitSet;
use crate::board::{Block, Cell, CellState, Col, Digit, Row};
use crate::errors::{GridParseError, InvalidCoordinate};
use std::fmt;

/// Characters accepted for an empty cell when parsing puzzle text.
const FILLERS: &[char] = &['_', '.', '0', 'x', 'X'];

/// A 9×9 sudoku board: 81 cells, a puzzle name and a solved flag.
///
/// The grid exclusively owns its cells. Regions (rows, columns, boxes) are
/// handed out as [`Cell`] coordinate arrays and resolved against the grid on
/// access, so every region always observes the current cell contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    name: String,
    cells: [CellState; 81],
    solved: bool,
    candidates_seeded: bool,
}

impl Grid {
    /// Parses a grid from 9 lines of 9 characters each.
    ///
    /// `'1'..='9'` are givens; `'_'`, `'.'`, `'0'`, `'x'` and `'X'` denote
    /// empty cells. Trailing blank lines are ignored. `name` is an opaque
    /// identifier carried along for reporting, typically the file stem.
    pub fn from_lines(name: impl Into<String>, text: &str) -> Result<Grid, GridParseError> {
        let mut lines: Vec<&str> = text.lines().map(|line| line.trim_end()).collect();
        while lines.last() == Some(&"") {
            lines.pop();
        }
        if lines.len() != 9 {
            return Err(GridParseError::WrongRowCount(lines.len()));
        }

        let mut cells = [CellState::Candidates(DigitSet::NONE); 81];
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != 9 {
                return Err(GridParseError::InvalidRowLength { row: row as u8, found });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_coords(Row::new(row as u8), Col::new(col as u8));
                match Digit::from_char(ch) {
                    Some(digit) => cells[cell.as_index()] = CellState::Digit(digit),
                    None if FILLERS.contains(&ch) => {}
                    None => {
                        return Err(GridParseError::InvalidCharacter { row: row as u8, ch });
                    }
                }
            }
        }

        Ok(Grid {
            name: name.into(),
            cells,
            solved: false,
            candidates_seeded: false,
        })
    }

    /// The name this grid was loaded under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The state of the cell at `cell`.
    pub fn cell(&self, cell: Cell) -> CellState {
        self.cells[cell.as_index()]
    }

    /// The digit entered at `cell`, if any.
    pub fn digit(&self, cell: Cell) -> Option<Digit> {
        self.cell(cell).digit()
    }

    /// The candidates of `cell`. Filled cells report the empty set.
    pub fn candidates(&self, cell: Cell) -> DigitSet {
        self.cell(cell).candidates()
    }

    /// Checks whether `cell` is still unsolved.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.cell(cell).is_empty()
    }

    /// Iterator over all still-unsolved cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.is_empty(cell))
    }

    /// Whether the completion check has verified this grid.
    /// Once set, the flag is never cleared.
    pub fn solved(&self) -> bool {
        self.solved
    }

    pub(crate) fn mark_solved(&mut self) {
        self.solved = true;
    }

    pub(crate) fn candidates_seeded(&self) -> bool {
        self.candidates_seeded
    }

    pub(crate) fn mark_candidates_seeded(&mut self) {
        self.candidates_seeded = true;
    }

    /// Replaces the candidate set of an unsolved cell.
    pub(crate) fn set_candidates(&mut self, cell: Cell, candidates: DigitSet) {
        debug_assert!(self.is_empty(cell));
        self.cells[cell.as_index()] = CellState::Candidates(candidates);
    }

    /// Enters a digit, dropping the cell's candidate storage.
    /// Peer candidate upkeep lives in the assignment propagator.
    pub(crate) fn place(&mut self, cell: Cell, digit: Digit) {
        debug_assert!(self.is_empty(cell));
        self.cells[cell.as_index()] = CellState::Digit(digit);
    }

    /// The cells of row `row`, left to right.
    pub fn row(&self, row: u8) -> Result<[Cell; 9], InvalidCoordinate> {
        let row = Row::new_checked(row).ok_or(InvalidCoordinate(row))?;
        Ok(row.cells())
    }

    /// The cells of column `col`, top to bottom.
    pub fn column(&self, col: u8) -> Result<[Cell; 9], InvalidCoordinate> {
        let col = Col::new_checked(col).ok_or(InvalidCoordinate(col))?;
        Ok(col.cells())
    }

    /// The cells of the box containing `(row, col)`, row-major within the box.
    pub fn box_at(&self, row: u8, col: u8) -> Result<[Cell; 9], InvalidCoordinate> {
        let row = Row::new_checked(row).ok_or(InvalidCoordinate(row))?;
        let col = Col::new_checked(col).ok_or(InvalidCoordinate(col))?;
        Ok(Block::containing(row, col).cells())
    }

    /// The 3-cell slice of the box with origin `(origin_row, origin_col)`
    /// aligned to its `local_row`th row.
    pub fn box_row_strip(
        &self,
        origin_row: u8,
        origin_col: u8,
        local_row: u8,
    ) -> Result<[Cell; 3], InvalidCoordinate> {
        let block = self.block_at(origin_row, origin_col)?;
        if local_row >= 3 {
            return Err(InvalidCoordinate(local_row));
        }
        Ok(block.row_strip(local_row))
    }

    /// The 3-cell slice of the box with origin `(origin_row, origin_col)`
    /// aligned to its `local_col`th column.
    pub fn box_col_strip(
        &self,
        origin_row: u8,
        origin_col: u8,
        local_col: u8,
    ) -> Result<[Cell; 3], InvalidCoordinate> {
        let block = self.block_at(origin_row, origin_col)?;
        if local_col >= 3 {
            return Err(InvalidCoordinate(local_col));
        }
        Ok(block.col_strip(local_col))
    }

    fn block_at(&self, row: u8, col: u8) -> Result<Block, InvalidCoordinate> {
        let row = Row::new_checked(row).ok_or(InvalidCoordinate(row))?;
        let col = Col::new_checked(col).ok_or(InvalidCoordinate(col))?;
        Ok(Block::containing(row, col))
    }

    /// The set of digits already entered among `cells`.
    ///
    /// This is an independent snapshot for membership tests; writing to it
    /// never touches the grid.
    pub fn region_digits(&self, cells: impl IntoIterator<Item = Cell>) -> DigitSet {
        cells.into_iter().filter_map(|cell| self.digit(cell)).collect()
    }
}

impl fmt::Display for Grid {
    /// Nine rows of nine characters, one row per line, `'_'` for empty
    /// cells, no trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in Row::all() {
            if row.get() > 0 {
                writeln!(f)?;
            }
            for cell in row.cells() {
                match self.digit(cell) {
                    Some(digit) => write!(f, "{}", digit.as_char())?,
                    None => write!(f, "_")?,
                }
            }
        }
        Ok(())
    }
}
