//! Test utilities for strategy implementations.
//!
//! This module provides [`StrategyTester`], a testing harness for verifying
//! that solving strategies make the deductions they are expected to make.
//!
//! # Example
//!
//! ```
//! use deduku_core::{Digit, Position};
//! use deduku_solver::{testing::StrategyTester, SingleCandidate};
//!
//! StrategyTester::from_str(
//!     "
//!     _36 751 428
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//!     ___ ___ ___
//! ",
//! )
//! .apply_once(&SingleCandidate::new())
//! .assert_assigned(Position::new(0, 0), Digit::D9);
//! ```

use std::str::FromStr as _;

use deduku_core::{Digit, DigitSet, Grid, Position};

use crate::{Board, Strategy};

/// A test harness for verifying strategy implementations.
///
/// `StrategyTester` tracks the initial and current state of a board,
/// allowing you to apply strategies and assert that they produce the
/// expected assignments.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable
/// tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct StrategyTester {
    initial: Board,
    current: Board,
}

impl StrategyTester {
    /// Creates a new tester from an initial board state.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            initial: board.clone(),
            current: board,
        }
    }

    /// Creates a new tester from a grid string.
    ///
    /// The string format matches [`Grid::from_str`]:
    /// - Digits 1-9 represent known cells
    /// - `.`, `_`, or `0` represent open cells
    /// - Whitespace is ignored
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid grid, or if the grid
    /// leaves some cell with no candidate at all.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        let grid = Grid::from_str(s).unwrap();
        let board = Board::new(&grid).unwrap();
        Self::new(board)
    }

    /// Applies the strategy once and returns self for chaining.
    ///
    /// # Panics
    ///
    /// Panics if the strategy returns an error.
    #[track_caller]
    pub fn apply_once<S>(mut self, strategy: &S) -> Self
    where
        S: Strategy,
    {
        strategy.apply(&mut self.current).unwrap();
        self
    }

    /// Applies the strategy repeatedly until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics if the strategy returns an error.
    #[track_caller]
    pub fn apply_until_stuck<S>(mut self, strategy: &S) -> Self
    where
        S: Strategy,
    {
        while strategy.apply(&mut self.current).unwrap() {}
        self
    }

    /// Asserts that a cell started open and now holds the given digit.
    ///
    /// # Panics
    ///
    /// Panics if the cell was known from the start or holds a different
    /// value.
    #[track_caller]
    pub fn assert_assigned(self, pos: Position, digit: Digit) -> Self {
        assert_eq!(
            self.initial.value(pos),
            None,
            "expected {pos} to start open"
        );
        let value = self.current.value(pos);
        assert_eq!(
            value,
            Some(digit),
            "expected {digit} at {pos}, found {value:?}"
        );
        self
    }

    /// Asserts that a cell still holds no value.
    ///
    /// # Panics
    ///
    /// Panics if the cell holds a value.
    #[track_caller]
    pub fn assert_unassigned(self, pos: Position) -> Self {
        let value = self.current.value(pos);
        assert_eq!(value, None, "expected {pos} to stay open, found {value:?}");
        self
    }

    /// Asserts that a cell's candidates are exactly the given digits.
    ///
    /// # Panics
    ///
    /// Panics if the candidate set differs.
    #[track_caller]
    pub fn assert_candidates<C>(self, pos: Position, digits: C) -> Self
    where
        C: IntoIterator<Item = Digit>,
    {
        let expected = DigitSet::from_iter(digits);
        let current = self.current.candidates(pos);
        assert_eq!(
            current, expected,
            "expected candidates {expected} at {pos}, found {current}"
        );
        self
    }

    /// Asserts that neither the value nor the candidates of a cell changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell differs from the initial state.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.initial.value(pos),
            self.current.value(pos),
            "expected no change at {pos}, but the value moved"
        );
        let initial = self.initial.candidates(pos);
        let current = self.current.candidates(pos);
        assert_eq!(
            initial, current,
            "expected no change at {pos}, but candidates went from {initial} to {current}"
        );
        self
    }

    /// Asserts that every cell of the board holds a value.
    ///
    /// # Panics
    ///
    /// Panics if any cell is still open, printing the current grid.
    #[track_caller]
    pub fn assert_complete(self) -> Self {
        assert!(
            self.current.is_complete(),
            "expected a complete board, {} cells are still open:\n{}",
            81 - self.current.known_count(),
            self.current.grid()
        );
        self
    }

    /// Returns the current board for ad-hoc inspection.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.current
    }
}
