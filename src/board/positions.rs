//! Coordinate types for cells and regions
//!
//! Rows, columns and boxes are *views*: they carry cell coordinates, never
//! cell contents. All reads and writes go through the [`Grid`](crate::Grid)
//! by [`Cell`] index, so a mutation made while walking one region is
//! immediately visible through every other region containing that cell.

macro_rules! define_index_types {
    ($( $(#[$doc:meta])* $name:ident : $limit:expr ),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                #[doc = concat!("Constructs a new index. `index` must be below ", stringify!($limit), ".")]
                pub fn new(index: u8) -> Self {
                    debug_assert!(index < $limit);
                    $name(index)
                }

                /// Checked constructor.
                pub fn new_checked(index: u8) -> Option<Self> {
                    if index < $limit {
                        Some($name(index))
                    } else {
                        None
                    }
                }

                /// Returns the raw index.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the index as `usize`.
                pub fn as_index(self) -> usize {
                    self.0 as usize
                }

                /// Returns an iterator over all indices, in order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
}

define_index_types!(
    /// One of the 81 cell positions, numbered 0..=80 in row-major order.
    Cell: 81,
    /// A row, 0..=8 from the top.
    Row: 9,
    /// A column, 0..=8 from the left.
    Col: 9,
    /// A 3×3 box, 0..=8 from left to right, top to bottom.
    Block: 9,
);

impl Cell {
    /// Constructs a cell from row and column coordinates.
    pub fn from_coords(row: Row, col: Col) -> Self {
        Cell(row.get() * 9 + col.get())
    }

    /// The row containing this cell.
    pub fn row(self) -> Row {
        Row::new(self.0 / 9)
    }

    /// The column containing this cell.
    pub fn col(self) -> Col {
        Col::new(self.0 % 9)
    }

    /// The box containing this cell.
    pub fn block(self) -> Block {
        Block::new(self.0 / 9 / 3 * 3 + self.0 % 9 / 3)
    }
}

impl Row {
    /// The nine cells of this row, left to right.
    pub fn cells(self) -> [Cell; 9] {
        std::array::from_fn(|col| Cell::from_coords(self, Col::new(col as u8)))
    }
}

impl Col {
    /// The nine cells of this column, top to bottom.
    pub fn cells(self) -> [Cell; 9] {
        std::array::from_fn(|row| Cell::from_coords(Row::new(row as u8), self))
    }
}

impl Block {
    /// The box containing the cell at `(row, col)`, i.e. the box with origin
    /// `(row / 3 * 3, col / 3 * 3)`.
    pub fn containing(row: Row, col: Col) -> Self {
        Cell::from_coords(row, col).block()
    }

    /// The row index of the box origin (0, 3 or 6).
    pub fn origin_row(self) -> u8 {
        self.0 / 3 * 3
    }

    /// The column index of the box origin (0, 3 or 6).
    pub fn origin_col(self) -> u8 {
        self.0 % 3 * 3
    }

    /// The nine cells of this box, row-major within the box.
    pub fn cells(self) -> [Cell; 9] {
        std::array::from_fn(|i| {
            let row = Row::new(self.origin_row() + i as u8 / 3);
            let col = Col::new(self.origin_col() + i as u8 % 3);
            Cell::from_coords(row, col)
        })
    }

    /// The three cells of this box lying in its `local_row`th row (0..=2).
    pub fn row_strip(self, local_row: u8) -> [Cell; 3] {
        debug_assert!(local_row < 3);
        let row = Row::new(self.origin_row() + local_row);
        std::array::from_fn(|i| Cell::from_coords(row, Col::new(self.origin_col() + i as u8)))
    }

    /// The three cells of this box lying in its `local_col`th column (0..=2).
    pub fn col_strip(self, local_col: u8) -> [Cell; 3] {
        debug_assert!(local_col < 3);
        let col = Col::new(self.origin_col() + local_col);
        std::array::from_fn(|i| Cell::from_coords(Row::new(self.origin_row() + i as u8), col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_coordinates() {
        let cell = Cell::new(40);
        assert_eq!(cell.row().get(), 4);
        assert_eq!(cell.col().get(), 4);
        assert_eq!(cell.block().get(), 4);

        let cell = Cell::from_coords(Row::new(8), Col::new(2));
        assert_eq!(cell.get(), 74);
        assert_eq!(cell.block().get(), 6);
    }

    #[test]
    fn regions_cover_the_grid() {
        for cells in Row::all()
            .map(Row::cells)
            .chain(Col::all().map(Col::cells))
            .chain(Block::all().map(Block::cells))
        {
            let mut seen = [false; 81];
            for cell in cells {
                seen[cell.as_index()] = true;
            }
            assert_eq!(seen.iter().filter(|&&s| s).count(), 9);
        }
    }

    #[test]
    fn strips_are_slices_of_their_box() {
        let block = Block::new(5);
        for local in 0..3 {
            for cell in block.row_strip(local) {
                assert_eq!(cell.block(), block);
                assert_eq!(cell.row().get(), block.origin_row() + local);
            }
            for cell in block.col_strip(local) {
                assert_eq!(cell.block(), block);
                assert_eq!(cell.col().get(), block.origin_col() + local);
            }
        }
    }
}
