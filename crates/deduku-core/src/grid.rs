//! The 9x9 puzzle grid and its known-value accessors.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{
    digit::Digit, digit_set::DigitSet, position::Position, position_set::PositionSet,
};

/// Inclusive boundary rectangles `(r0, c0, r1, c1)` of the nine 3x3 blocks,
/// left to right then top to bottom.
const BLOCK_BOUNDS: [(usize, usize, usize, usize); 9] = [
    (0, 0, 2, 2),
    (0, 3, 2, 5),
    (0, 6, 2, 8),
    (3, 0, 5, 2),
    (3, 3, 5, 5),
    (3, 6, 5, 8),
    (6, 0, 8, 2),
    (6, 3, 8, 5),
    (6, 6, 8, 8),
];

/// A 9x9 puzzle grid of cell values in `0..=9`, where `0` marks an unknown
/// cell.
///
/// Access by [`Position`] is infallible. The raw-index accessors [`row`],
/// [`column`], and [`block`] return the known (non-zero) values of a line or
/// region as a [`DigitSet`]. An out-of-range row or column index is rejected
/// with [`GridError::InvalidIndex`]; a block coordinate inside no rectangle
/// is rejected with [`GridError::InvalidCoordinate`].
///
/// [`row`]: Self::row
/// [`column`]: Self::column
/// [`block`]: Self::block
///
/// # Examples
///
/// ```
/// use deduku_core::{Digit, DigitSet, Grid, Position};
///
/// let grid: Grid = "
///     ___7__428
///     7148___5_
///     2__94__1_
///     89______1
///     __2_6_7__
///     6______49
///     _2__84__5
///     _5___2174
///     469__7___
/// "
/// .parse()?;
///
/// assert_eq!(grid.value(Position::new(0, 3)), Some(Digit::D7));
/// assert_eq!(
///     grid.row(0)?,
///     DigitSet::from_iter([Digit::D7, Digit::D4, Digit::D2, Digit::D8]),
/// );
/// assert_eq!(grid.column(0)?.len(), 5);
/// assert_eq!(grid.block(0, 0)?.len(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    cells: [[u8; 9]; 9],
}

impl Grid {
    /// Creates a grid with every cell unknown.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [[0; 9]; 9] }
    }

    /// Creates a grid from raw row-major cell values.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidValue`] if any cell is greater than 9.
    pub fn from_rows(rows: [[u8; 9]; 9]) -> Result<Self, GridError> {
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value > 9 {
                    return Err(GridError::InvalidValue { row, col, value });
                }
            }
        }
        Ok(Self { cells: rows })
    }

    /// Returns the raw row-major cell values.
    #[must_use]
    pub const fn rows(&self) -> [[u8; 9]; 9] {
        self.cells
    }

    /// Returns the value at `pos`, or `None` if the cell is unknown.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        Digit::try_from_value(self.cells[pos.row()][pos.col()])
    }

    /// Sets the value at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Digit) {
        self.cells[pos.row()][pos.col()] = digit.value();
    }

    /// Marks the cell at `pos` unknown again.
    pub const fn clear(&mut self, pos: Position) {
        self.cells[pos.row()][pos.col()] = 0;
    }

    /// Returns the number of known cells.
    #[must_use]
    pub fn known_count(&self) -> usize {
        Position::ALL
            .iter()
            .filter(|pos| self.value(**pos).is_some())
            .count()
    }

    /// Returns the positions of all known cells.
    #[must_use]
    pub fn known_positions(&self) -> PositionSet {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.value(pos).is_some())
            .collect()
    }

    /// Returns `true` if all 81 cells are known.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.known_count() == 81
    }

    /// Returns the known values in row `index` as a set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidIndex`] if `index` is 9 or more.
    pub fn row(&self, index: usize) -> Result<DigitSet, GridError> {
        if index > 8 {
            return Err(GridError::InvalidIndex { axis: "row", index });
        }
        Ok(self.cells[index]
            .iter()
            .filter_map(|&value| Digit::try_from_value(value))
            .collect())
    }

    /// Returns the known values in column `index` as a set.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidIndex`] if `index` is 9 or more.
    pub fn column(&self, index: usize) -> Result<DigitSet, GridError> {
        if index > 8 {
            return Err(GridError::InvalidIndex { axis: "column", index });
        }
        Ok(self
            .cells
            .iter()
            .filter_map(|row| Digit::try_from_value(row[index]))
            .collect())
    }

    /// Returns the known values in the 3x3 block containing cell
    /// `(row, col)` as a set.
    ///
    /// The block is found by searching the fixed boundary rectangles; a
    /// coordinate contained in no rectangle is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidCoordinate`] if `(row, col)` lies outside
    /// every block.
    pub fn block(&self, row: usize, col: usize) -> Result<DigitSet, GridError> {
        let (r0, c0, r1, c1) = BLOCK_BOUNDS
            .iter()
            .copied()
            .find(|&(r0, c0, r1, c1)| (r0..=r1).contains(&row) && (c0..=c1).contains(&col))
            .ok_or(GridError::InvalidCoordinate { row, col })?;
        let mut set = DigitSet::EMPTY;
        for r in r0..=r1 {
            for c in c0..=c1 {
                if let Some(digit) = Digit::try_from_value(self.cells[r][c]) {
                    set.insert(digit);
                }
            }
        }
        Ok(set)
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &value in row {
                match Digit::try_from_value(value) {
                    Some(digit) => write!(f, "{digit}")?,
                    None => f.write_str("_")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    /// Parses 81 cell characters: `1`-`9` for known values, `0`, `_`, or `.`
    /// for unknown cells. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, ParseGridError> {
        let mut cells = [[0_u8; 9]; 9];
        let mut index = 0;
        for character in s.chars() {
            if character.is_whitespace() {
                continue;
            }
            #[expect(clippy::cast_possible_truncation)]
            let value = match character.to_digit(10) {
                Some(digit) => digit as u8,
                None if matches!(character, '_' | '.') => 0,
                None => return Err(ParseGridError::UnexpectedCharacter { character }),
            };
            if index < 81 {
                cells[index / 9][index % 9] = value;
            }
            index += 1;
        }
        if index != 81 {
            return Err(ParseGridError::WrongCellCount { count: index });
        }
        Ok(Self { cells })
    }
}

/// Errors from grid construction and the known-value accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// A row or column index outside the 9x9 grid was passed to a line
    /// accessor. Carries only the axis that was looked up.
    #[display("{axis} index {index} is outside the 9x9 grid")]
    InvalidIndex {
        /// The axis that was indexed, `"row"` or `"column"`.
        axis: &'static str,
        /// The rejected index.
        index: usize,
    },
    /// A coordinate outside the 9x9 grid was passed to the block accessor.
    /// This is a programmer error, never produced by valid puzzle data.
    #[display("coordinate (row {row}, col {col}) is outside the 9x9 grid")]
    InvalidCoordinate {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
    },
    /// A raw cell value outside `0..=9`.
    #[display("cell value {value} at (row {row}, col {col}) is outside 0-9")]
    InvalidValue {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        col: usize,
        /// The rejected value.
        value: u8,
    },
}

/// Errors from parsing a grid string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseGridError {
    /// A character that is neither a cell marker nor whitespace.
    #[display("unexpected character {character:?} in grid string")]
    UnexpectedCharacter {
        /// The rejected character.
        character: char,
    },
    /// The string did not contain exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cell characters found.
        count: usize,
    },
}
