use deduku_core::{Digit, DigitSet, Position};

use super::{BoxedStrategy, Strategy};
use crate::{Board, SolverError};

const NAME: &str = "single position";

/// Assigns a cell when one of its candidates has no other home in a peer
/// group.
///
/// For each open cell the strategy subtracts, from a copy of the cell's
/// candidate set, everything claimed by the peers of one group at a time. A
/// filled peer claims its value; an open peer claims its whole candidate
/// set. Groups are tried in a fixed order (column, row, block); a group
/// whose remainder empties part way, or keeps several digits, is abandoned
/// for the next. A remainder of exactly one digit is the cell's value.
///
/// The assignment refreshes the peers but does not cascade; singletons it
/// creates are picked up by [`SingleCandidate`](super::SingleCandidate) in
/// the next round.
///
/// # Examples
///
/// ```
/// use deduku_core::{Digit, Grid, Position};
/// use deduku_solver::{Board, SinglePosition, Strategy};
///
/// // (0, 0) keeps the candidates {1 2}, but every open cell of column 0
/// // sees a 1 in its own row, so 1 has a single home in that column.
/// let grid: Grid = "
///     ___ 345 678
///     ___ _1_ ___
///     ___ ___ _1_
///     _1_ ___ ___
///     ___ __1 ___
///     9__ ___ __1
///     __1 ___ ___
///     ___ 1__ ___
///     ___ ___ 1__
/// "
/// .parse()?;
///
/// let mut board = Board::new(&grid)?;
/// let assigned = SinglePosition::new().apply(&mut board)?;
///
/// assert!(assigned);
/// assert_eq!(board.value(Position::new(0, 0)), Some(Digit::D1));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SinglePosition;

impl SinglePosition {
    /// Creates a new `SinglePosition` strategy.
    #[must_use]
    pub const fn new() -> Self {
        SinglePosition
    }
}

impl Strategy for SinglePosition {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolverError> {
        let mut assigned = false;
        for target in Position::ALL {
            if board.is_filled(target) {
                continue;
            }
            if let Some(digit) = find_assignment(board, target) {
                log::trace!("{NAME}: {digit} at {target}");
                board.assign(target, digit)?;
                assigned = true;
            }
        }
        Ok(assigned)
    }
}

fn find_assignment(board: &Board, target: Position) -> Option<Digit> {
    let candidates = board.candidates(target);
    let groups = [
        target.column_peers(),
        target.row_peers(),
        target.block_peers(),
    ];
    groups
        .iter()
        .find_map(|peers| trial(board, candidates, peers))
}

/// Subtracts every peer claim from `candidates` and returns the survivor.
///
/// `None` if the remainder empties part way through the group or keeps
/// several digits at the end.
fn trial(board: &Board, candidates: DigitSet, peers: &[Position; 8]) -> Option<Digit> {
    let mut remainder = candidates;
    for &peer in peers {
        remainder -= claim(board, peer);
        if remainder.is_empty() {
            return None;
        }
    }
    remainder.single()
}

fn claim(board: &Board, pos: Position) -> DigitSet {
    match board.value(pos) {
        Some(digit) => DigitSet::from(digit),
        None => board.candidates(pos),
    }
}
