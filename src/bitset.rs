//! Fixed-size bitset over the nine sudoku digits
//!
//! Candidate bookkeeping touches every cell of the grid on every pass, so the
//! candidate sets are stored as bitmasks rather than as lists of digits. The
//! newtype keeps raw masks out of the rest of the crate.

use crate::board::Digit;
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// A set of digits 1..=9, backed by the low nine bits of a `u16`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DigitSet(u16);

impl DigitSet {
    /// The set containing all nine digits.
    pub const ALL: DigitSet = DigitSet(0o777);

    /// The empty set.
    pub const NONE: DigitSet = DigitSet(0);

    /// Adds `digit` to the set.
    pub fn insert(&mut self, digit: Digit) {
        self.0 |= digit.as_mask();
    }

    /// Removes `digit` from the set. Removing an absent digit is a no-op.
    pub fn remove(&mut self, digit: Digit) {
        self.0 &= !digit.as_mask();
    }

    /// Checks whether `digit` is in the set.
    pub fn contains(self, digit: Digit) -> bool {
        self.0 & digit.as_mask() != 0
    }

    /// Returns the digits in `self` that are not in `other`.
    pub fn without(self, other: DigitSet) -> DigitSet {
        DigitSet(self.0 & !other.0)
    }

    /// Returns the number of digits in the set.
    pub fn len(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Checks whether the set contains no digit.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Checks whether the set contains all nine digits.
    pub fn is_full(self) -> bool {
        self == Self::ALL
    }

    /// Returns the only digit in the set, iff exactly one digit is present.
    pub fn unique(self) -> Option<Digit> {
        match self.len() {
            1 => self.into_iter().next(),
            _ => None,
        }
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, other: Self) -> Self {
        DigitSet(self.0 & other.0)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, other: Self) {
        self.0 &= other.0;
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, other: Self) -> Self {
        DigitSet(self.0 | other.0)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, other: Self) {
        self.0 |= other.0;
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = DigitSet::NONE;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

/// Iterator over the digits contained in a [`DigitSet`], lowest first.
#[derive(Copy, Clone, Debug)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Digit::from_index(index))
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        Iter(self.0)
    }
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.into_iter().map(Digit::get)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_contains() {
        let mut set = DigitSet::NONE;
        set.insert(Digit::new(4));
        set.insert(Digit::new(9));
        assert!(set.contains(Digit::new(4)));
        assert!(!set.contains(Digit::new(5)));
        assert_eq!(set.len(), 2);

        set.remove(Digit::new(4));
        set.remove(Digit::new(4));
        assert!(!set.contains(Digit::new(4)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn unique_only_for_singletons() {
        assert_eq!(DigitSet::NONE.unique(), None);
        assert_eq!(DigitSet::ALL.unique(), None);

        let set: DigitSet = [Digit::new(7)].into_iter().collect();
        assert_eq!(set.unique(), Some(Digit::new(7)));
    }

    #[test]
    fn iterates_lowest_first() {
        let set: DigitSet = [Digit::new(8), Digit::new(1), Digit::new(3)].into_iter().collect();
        let digits: Vec<u8> = set.into_iter().map(Digit::get).collect();
        assert_eq!(digits, [1, 3, 8]);
    }

    #[test]
    fn without_is_set_difference() {
        let evens: DigitSet = [2, 4, 6, 8].into_iter().map(Digit::new).collect();
        let small: DigitSet = [1, 2, 3, 4].into_iter().map(Digit::new).collect();
        let diff: Vec<u8> = evens.without(small).into_iter().map(Digit::get).collect();
        assert_eq!(diff, [6, 8]);
    }
}
