//! A set of grid positions, stored as an 81-bit mask.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitOr, BitOrAssign},
};

use crate::position::Position;

/// A set of cell positions, backed by a `u128` with one bit per cell in
/// row-major order.
///
/// Used for filled-cell bookkeeping, peer deduplication, and worklist
/// membership checks, where the alternative would be an 81-entry boolean
/// array.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionSet(u128);

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn mask(pos: Position) -> u128 {
        1 << pos.cell_index()
    }

    /// Adds a position, returning `true` if it was not already present.
    pub const fn insert(&mut self, pos: Position) -> bool {
        let mask = Self::mask(pos);
        let added = self.0 & mask == 0;
        self.0 |= mask;
        added
    }

    /// Removes a position, returning `true` if it was present.
    pub const fn remove(&mut self, pos: Position) -> bool {
        let mask = Self::mask(pos);
        let removed = self.0 & mask != 0;
        self.0 &= !mask;
        removed
    }

    /// Returns `true` if the position is in the set.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.0 & Self::mask(pos) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set contains no positions.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns an iterator over the positions in row-major order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the positions of a [`PositionSet`] in row-major order.
#[derive(Debug, Clone)]
pub struct Iter(u128);

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.0 == 0 {
            return None;
        }
        let pos = Position::from_cell_index(self.0.trailing_zeros() as usize);
        self.0 &= self.0 - 1;
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}

impl FusedIterator for Iter {}

impl Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PositionSet{")?;
        for (index, pos) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{pos}")?;
        }
        f.write_str("}")
    }
}
