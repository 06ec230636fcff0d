//! Core data structures for the deduku sudoku solver.
//!
//! This crate holds the grid-domain vocabulary shared by the solver and its
//! callers: digits, bitmask digit sets, cell positions, position sets, the
//! 9x9 grid itself, and the plain-text conformance-fixture format.
//!
//! # Overview
//!
//! - [`digit`]: type-safe digits 1-9 ([`Digit`])
//! - [`digit_set`]: 9-bit candidate masks with set algebra ([`DigitSet`])
//! - [`position`]: cell coordinates and peer geometry ([`Position`])
//! - [`position_set`]: 81-bit cell bitsets ([`PositionSet`])
//! - [`grid`]: the puzzle grid with known-value accessors ([`Grid`])
//! - [`fixture`]: puzzle/solution fixture parsing ([`Fixture`])
//!
//! # Examples
//!
//! ```
//! use deduku_core::{DigitSet, Grid};
//!
//! let grid: Grid = "
//!     ___7__428
//!     7148___5_
//!     2__94__1_
//!     89______1
//!     __2_6_7__
//!     6______49
//!     _2__84__5
//!     _5___2174
//!     469__7___
//! "
//! .parse()?;
//!
//! // Digits that could still go in the top-left cell.
//! let candidates = DigitSet::ALL - grid.row(0)? - grid.column(0)? - grid.block(0, 0)?;
//! assert_eq!(candidates.to_string(), "{3 5 9}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod digit;
pub mod digit_set;
pub mod fixture;
pub mod grid;
pub mod position;
pub mod position_set;

// Re-export commonly used types
pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    fixture::{Fixture, FixtureError},
    grid::{Grid, GridError, ParseGridError},
    position::Position,
    position_set::PositionSet,
};
