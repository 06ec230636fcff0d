//! Cell coordinates on the 9x9 grid.

use std::fmt::{self, Display};

use crate::position_set::PositionSet;

/// A cell coordinate: `(row, col)` with both components in `0..9`.
///
/// The in-range invariant is established at construction, so accessors and
/// derived indices never fail. Peer enumeration lives here because it is pure
/// geometry, independent of any grid contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    #[expect(clippy::cast_possible_truncation)]
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut index = 0;
        while index < 81 {
            all[index] = Self {
                row: (index / 9) as u8,
                col: (index % 9) as u8,
            };
            index += 1;
        }
        all
    };

    /// Creates a position.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 9 or more.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn new(row: usize, col: usize) -> Self {
        assert!(row < 9 && col < 9, "position out of range 0-8");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Creates a position from a row-major cell index in `0..81`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is 81 or more.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_cell_index(index: usize) -> Self {
        assert!(index < 81, "cell index out of range 0-80");
        Self {
            row: (index / 9) as u8,
            col: (index % 9) as u8,
        }
    }

    /// Row index in `0..9`.
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index in `0..9`.
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index in `0..81`, for indexing per-cell tables.
    #[must_use]
    pub const fn cell_index(self) -> usize {
        self.row() * 9 + self.col()
    }

    /// Index of the 3x3 block containing this position, in `0..9`,
    /// numbered left to right then top to bottom.
    #[must_use]
    pub const fn block_index(self) -> usize {
        self.row() / 3 * 3 + self.col() / 3
    }

    /// The other eight cells in this position's row, in ascending column
    /// order.
    #[must_use]
    pub const fn row_peers(self) -> [Self; 8] {
        let mut peers = [self; 8];
        let mut count = 0;
        let mut col = 0;
        while col < 9 {
            if col != self.col {
                peers[count] = Self { row: self.row, col };
                count += 1;
            }
            col += 1;
        }
        peers
    }

    /// The other eight cells in this position's column, in ascending row
    /// order.
    #[must_use]
    pub const fn column_peers(self) -> [Self; 8] {
        let mut peers = [self; 8];
        let mut count = 0;
        let mut row = 0;
        while row < 9 {
            if row != self.row {
                peers[count] = Self { row, col: self.col };
                count += 1;
            }
            row += 1;
        }
        peers
    }

    /// The other eight cells in this position's 3x3 block, in row-major
    /// order.
    #[must_use]
    pub const fn block_peers(self) -> [Self; 8] {
        let row_base = self.row / 3 * 3;
        let col_base = self.col / 3 * 3;
        let mut peers = [self; 8];
        let mut count = 0;
        let mut row = row_base;
        while row < row_base + 3 {
            let mut col = col_base;
            while col < col_base + 3 {
                if row != self.row || col != self.col {
                    peers[count] = Self { row, col };
                    count += 1;
                }
                col += 1;
            }
            row += 1;
        }
        peers
    }

    /// Every cell sharing a row, column, or block with this one, deduplicated.
    ///
    /// Always 20 positions: 8 row peers, 8 column peers, and the 4 block
    /// peers outside this position's row and column.
    #[must_use]
    pub fn peers(self) -> PositionSet {
        let mut set = PositionSet::EMPTY;
        for peer in self.row_peers() {
            set.insert(peer);
        }
        for peer in self.column_peers() {
            set.insert(peer);
        }
        for peer in self.block_peers() {
            set.insert(peer);
        }
        set
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}
