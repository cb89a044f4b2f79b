use std::num::NonZeroU8;

/// A digit that can be entered in a cell of a sudoku.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panics
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from an index, i.e. `digit - 1`.
    ///
    /// # Panics
    /// Panics, if the index is not in the range of `0..=8`.
    pub(crate) fn from_index(index: u8) -> Self {
        Self::new_checked(index + 1).unwrap()
    }

    /// Constructs a `Digit` from its character form `'1'..='9'`.
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).and_then(|digit| Self::new_checked(digit as u8))
    }

    /// Returns an iterator over all digits.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit as `usize`, offset by `-1`, so the numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }

    /// Returns the digit's character form `'1'..='9'`.
    pub fn as_char(self) -> char {
        (b'0' + self.get()) as char
    }

    pub(crate) fn as_mask(self) -> u16 {
        1 << (self.get() - 1)
    }
}
