//! A set of candidate digits, stored as a 9-bit mask.

use std::{
    fmt::{self, Debug, Display},
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign},
};

use crate::digit::Digit;

/// A set of digits 1-9, backed by a `u16` where bit `n` represents digit
/// `n + 1`.
///
/// Candidate elimination is set subtraction, so the common operations here are
/// `difference` (the `-` operator) and [`single`](Self::single), which asks
/// whether exactly one candidate is left. All operations are O(1) bit
/// arithmetic.
///
/// # Examples
///
/// ```
/// use deduku_core::{Digit, DigitSet};
///
/// let row = DigitSet::from_iter([Digit::D7, Digit::D4, Digit::D2, Digit::D8]);
/// let remaining = DigitSet::ALL - row;
///
/// assert_eq!(remaining.len(), 5);
/// assert!(remaining.contains(Digit::D3));
/// assert!(!remaining.contains(Digit::D7));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitSet(u16);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set of all nine digits, one bit per digit.
    pub const ALL: Self = Self(0b1_1111_1111);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn mask(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Adds a digit, returning `true` if it was not already present.
    pub const fn insert(&mut self, digit: Digit) -> bool {
        let mask = Self::mask(digit);
        let added = self.0 & mask == 0;
        self.0 |= mask;
        added
    }

    /// Removes a digit, returning `true` if it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let mask = Self::mask(digit);
        let removed = self.0 & mask != 0;
        self.0 &= !mask;
        removed
    }

    /// Returns `true` if the digit is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & Self::mask(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole member if the set has exactly one, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use deduku_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from(Digit::D9).single(), Some(Digit::D9));
    /// assert_eq!(DigitSet::ALL.single(), None);
    /// assert_eq!(DigitSet::EMPTY.single(), None);
    /// ```
    #[must_use]
    pub const fn single(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Some(Digit::from_value(value))
        } else {
            None
        }
    }

    /// Returns the digits present in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the digits present in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits present in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl From<Digit> for DigitSet {
    fn from(digit: Digit) -> Self {
        Self(Self::mask(digit))
    }
}

impl Sub for DigitSet {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.difference(rhs)
    }
}

impl SubAssign for DigitSet {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.difference(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::from_value(self.0.trailing_zeros() as u8 + 1);
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

impl Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, digit) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            Display::fmt(&digit, f)?;
        }
        f.write_str("}")
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigitSet{self}")
    }
}
