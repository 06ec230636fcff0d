//! Constraint-propagation solving for 9x9 sudoku puzzles.
//!
//! Given a partially filled [`Grid`](deduku_core::Grid), the solver runs
//! rounds of two elimination strategies until a round deduces nothing new:
//!
//! - [`SingleCandidate`]: assigns every cell whose candidate set has exactly
//!   one member, cascading through the peers affected by each assignment.
//! - [`SinglePosition`]: assigns a cell when all but one of its candidates
//!   are claimed by the peers in one of its three peer groups.
//!
//! Puzzles that elimination alone cannot finish end unsolved; the solver
//! never guesses or backtracks. Structural validity of the input and of the
//! final grid is judged by [`validator::is_correct`].
//!
//! # Examples
//!
//! ```
//! use deduku_core::Grid;
//! use deduku_solver::Solver;
//!
//! let grid: Grid = "
//!     ___ 7__ 428
//!     714 8__ _5_
//!     2__ 94_ _1_
//!     89_ ___ __1
//!     __2 _6_ 7__
//!     6__ ___ _49
//!     _2_ _84 __5
//!     _5_ __2 174
//!     469 __7 ___
//! "
//! .parse()?;
//!
//! let solver = Solver::with_all_strategies();
//! let report = solver.solve(&grid)?;
//!
//! assert!(report.is_solved());
//! assert!(report.is_correct());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use deduku_core::{GridError, Position};

pub mod board;
pub mod solver;
pub mod strategy;
pub mod testing;
pub mod validator;

pub use self::{
    board::Board,
    solver::{SolvePhase, SolveReport, SolveStats, Solver},
    strategy::{BoxedStrategy, SingleCandidate, SinglePosition, Strategy},
};

/// Errors that can occur while solving.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// Every candidate for a cell has been eliminated.
    ///
    /// The input puzzle or an earlier deduction is inconsistent; no further
    /// progress is possible.
    #[display("contradiction at {pos}: every candidate is eliminated")]
    Contradiction {
        /// The cell whose candidate set became empty.
        pos: Position,
    },
    /// A grid accessor rejected its coordinates.
    #[display("grid lookup failed: {_0}")]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use deduku_core::Position;

    use super::*;

    #[test]
    fn contradiction_names_the_cell() {
        let err = SolverError::Contradiction {
            pos: Position::new(2, 7),
        };
        assert_eq!(
            err.to_string(),
            "contradiction at r2c7: every candidate is eliminated"
        );
    }

    #[test]
    fn grid_errors_convert() {
        let err = SolverError::from(GridError::InvalidCoordinate { row: 9, col: 0 });
        assert!(matches!(err, SolverError::Grid(_)));
        assert!(err.to_string().starts_with("grid lookup failed:"));
    }
}
