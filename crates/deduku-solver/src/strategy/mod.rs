//! Elimination strategies.
//!
//! Each strategy implements the [`Strategy`] trait and deduces cell values
//! from the candidate sets of a [`Board`]. One `apply` call makes a full
//! pass over the board; the solver runs a strategy to exhaustion by calling
//! `apply` until it returns `false`.

use std::fmt::Debug;

pub use self::{single_candidate::SingleCandidate, single_position::SinglePosition};
use crate::{Board, SolverError};

mod single_candidate;
mod single_position;

/// Returns all available strategies.
///
/// Strategies are ordered cheapest first; within a round the solver exhausts
/// each one in this order.
#[must_use]
pub fn all_strategies() -> Vec<BoxedStrategy> {
    vec![
        Box::new(SingleCandidate::new()),
        Box::new(SinglePosition::new()),
    ]
}

/// A rule that deduces cell values from candidate sets.
pub trait Strategy: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Makes one full pass over the board.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - At least one cell was assigned during the pass
    /// * `Ok(false)` - The pass assigned nothing
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if an assignment leaves some
    /// cell with no candidates.
    fn apply(&self, board: &mut Board) -> Result<bool, SolverError>;
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_strategies_runs_the_cheap_rule_first() {
        let strategies = all_strategies();
        let names: Vec<_> = strategies.iter().map(|s| s.name()).collect();
        assert_eq!(names, ["single candidate", "single position"]);
    }

    #[test]
    fn boxed_strategies_clone() {
        let strategies = all_strategies();
        let cloned = strategies.clone();
        for (original, copy) in strategies.iter().zip(&cloned) {
            assert_eq!(original.name(), copy.name());
        }
    }
}
