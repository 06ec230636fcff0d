use std::collections::VecDeque;

use deduku_core::{Position, PositionSet};

use super::{BoxedStrategy, Strategy};
use crate::{Board, SolverError};

const NAME: &str = "single candidate";

/// Assigns every cell whose candidate set has exactly one member.
///
/// Each assignment refreshes the candidates of the cell's peers, which can
/// leave further cells with a single candidate; those are chased right away
/// through a FIFO worklist until the affected neighborhood settles. One
/// `apply` call scans the whole board, so a puzzle solvable by this rule
/// alone finishes in a single pass.
///
/// # Examples
///
/// ```
/// use deduku_core::{Digit, Grid, Position};
/// use deduku_solver::{Board, SingleCandidate, Strategy};
///
/// // One open cell in the top row; its candidate set is {9}.
/// let grid: Grid = "
///     _36 751 428
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()?;
///
/// let mut board = Board::new(&grid)?;
/// let assigned = SingleCandidate::new().apply(&mut board)?;
///
/// assert!(assigned);
/// assert_eq!(board.value(Position::new(0, 0)), Some(Digit::D9));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SingleCandidate;

impl SingleCandidate {
    /// Creates a new `SingleCandidate` strategy.
    #[must_use]
    pub const fn new() -> Self {
        SingleCandidate
    }
}

impl Strategy for SingleCandidate {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn apply(&self, board: &mut Board) -> Result<bool, SolverError> {
        let mut assigned = false;
        for pos in Position::ALL {
            if board.is_filled(pos) || board.candidates(pos).single().is_none() {
                continue;
            }
            cascade_from(board, pos)?;
            assigned = true;
        }
        Ok(assigned)
    }
}

/// Assigns the singleton at `seed`, then chases every peer an assignment
/// reduces to a single candidate.
///
/// The worklist is FIFO with a dedup set, so a cell is enqueued at most
/// once. Candidates are re-read at pop time; entries stale by then are
/// skipped.
fn cascade_from(board: &mut Board, seed: Position) -> Result<(), SolverError> {
    let mut queue = VecDeque::from([seed]);
    let mut queued = PositionSet::new();
    queued.insert(seed);

    while let Some(pos) = queue.pop_front() {
        if board.is_filled(pos) {
            continue;
        }
        let Some(digit) = board.candidates(pos).single() else {
            continue;
        };
        log::trace!("{NAME}: {digit} at {pos}");
        for peer in board.assign(pos, digit)? {
            if queued.insert(peer) {
                queue.push_back(peer);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use deduku_core::{Digit, Grid, Position};

    use super::*;
    use crate::testing::StrategyTester;

    #[test]
    fn assigns_a_lone_candidate() {
        // (0, 0) is the only open cell of its row, so its candidate set is
        // the one missing digit.
        StrategyTester::from_str(
            "
            _36 751 428
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&SingleCandidate::new())
        .assert_assigned(Position::new(0, 0), Digit::D9);
    }

    #[test]
    fn cascade_reaches_cells_behind_the_scan() {
        // The scan skips (0, 5) with {8 9}, then assigns 9 at (0, 8).
        // That strips 9 from (0, 5), and the worklist assigns it in the
        // same pass even though the scan has already moved past it.
        StrategyTester::from_str(
            "
            312 54_ 76_
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            123 45_ 678
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .apply_once(&SingleCandidate::new())
        .assert_assigned(Position::new(0, 8), Digit::D9)
        .assert_assigned(Position::new(0, 5), Digit::D8)
        .assert_assigned(Position::new(5, 5), Digit::D9);
    }

    #[test]
    fn no_progress_without_singletons() {
        let grid = Grid::new();
        let mut board = Board::new(&grid).unwrap();

        assert!(!SingleCandidate::new().apply(&mut board).unwrap());
        assert_eq!(board.known_count(), 0);
    }

    #[test]
    fn contradiction_surfaces_from_the_cascade() {
        // Both open cells in the top row are forced to 9, one by the 3 in
        // column 0 and one by the 3 in column 1. Assigning the first
        // empties the second.
        let grid: Grid = "
            __6 751 428
            ___ ___ ___
            ___ ___ ___
            3__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            _3_ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();
        let mut board = Board::new(&grid).unwrap();

        let err = SingleCandidate::new().apply(&mut board).unwrap_err();
        assert_eq!(
            err,
            SolverError::Contradiction {
                pos: Position::new(0, 1)
            }
        );
    }

    #[test]
    fn solves_an_easy_puzzle_alone() {
        StrategyTester::from_str(
            "
            ___ 7__ 428
            714 8__ _5_
            2__ 94_ _1_
            89_ ___ __1
            __2 _6_ 7__
            6__ ___ _49
            _2_ _84 __5
            _5_ __2 174
            469 __7 ___
        ",
        )
        .apply_until_stuck(&SingleCandidate::new())
        .assert_assigned(Position::new(0, 0), Digit::D9)
        .assert_complete();
    }
}
