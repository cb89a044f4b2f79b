use crate::bitset::DigitSet;
use crate::board::Digit;

/// Contains either a digit or the candidates for an unsolved cell.
///
/// A filled cell carries no candidate storage at all, so the invariant
/// "cell has a value ⇒ cell has no candidates" cannot be broken.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum CellState {
    Digit(Digit),
    Candidates(DigitSet),
}

impl CellState {
    /// The digit entered in this cell, if any.
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Digit(digit) => Some(digit),
            CellState::Candidates(_) => None,
        }
    }

    /// The candidates of this cell. Filled cells report the empty set.
    pub fn candidates(self) -> DigitSet {
        match self {
            CellState::Digit(_) => DigitSet::NONE,
            CellState::Candidates(candidates) => candidates,
        }
    }

    /// Checks whether the cell is still unsolved.
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Candidates(_))
    }
}
