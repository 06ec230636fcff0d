//! Working state for a single solve attempt.

use deduku_core::{Digit, DigitSet, Grid, Position, PositionSet};

use crate::SolverError;

/// A grid under deduction, with a candidate set cached per cell.
///
/// The cache always equals what recomputation from the grid would produce:
/// [`assign`](Self::assign) refreshes the candidates of every peer of the
/// assigned cell, and no other operation mutates the grid. Filled cells keep
/// an empty candidate slot.
///
/// # Examples
///
/// ```
/// use deduku_core::{Digit, Grid, Position};
/// use deduku_solver::Board;
///
/// let grid: Grid = "
///     ___ 7__ 428
///     714 8__ _5_
///     2__ 94_ _1_
///     89_ ___ __1
///     __2 _6_ 7__
///     6__ ___ _49
///     _2_ _84 __5
///     _5_ __2 174
///     469 __7 ___
/// "
/// .parse()?;
///
/// let board = Board::new(&grid)?;
/// let candidates = board.candidates(Position::new(0, 0));
///
/// assert_eq!(candidates.to_string(), "{3 5 9}");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    candidates: [DigitSet; 81],
    filled: PositionSet,
}

impl Board {
    /// Builds a board from a grid, computing every open cell's candidates.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if some open cell already has
    /// no candidates.
    pub fn new(grid: &Grid) -> Result<Self, SolverError> {
        let mut board = Self {
            grid: *grid,
            candidates: [DigitSet::EMPTY; 81],
            filled: grid.known_positions(),
        };
        for pos in Position::ALL {
            if !board.filled.contains(pos) {
                board.candidates[pos.cell_index()] = Self::recompute(&board.grid, pos)?;
            }
        }
        Ok(board)
    }

    fn recompute(grid: &Grid, pos: Position) -> Result<DigitSet, SolverError> {
        let candidates = DigitSet::ALL
            - grid.row(pos.row())?
            - grid.column(pos.col())?
            - grid.block(pos.row(), pos.col())?;
        if candidates.is_empty() {
            return Err(SolverError::Contradiction { pos });
        }
        Ok(candidates)
    }

    /// Returns the candidates for a cell, empty once the cell is filled.
    #[must_use]
    pub const fn candidates(&self, pos: Position) -> DigitSet {
        self.candidates[pos.cell_index()]
    }

    /// Returns the value of a cell, `None` while it is open.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.grid.value(pos)
    }

    /// Returns `true` if the cell holds a value.
    #[must_use]
    pub const fn is_filled(&self, pos: Position) -> bool {
        self.filled.contains(pos)
    }

    /// Returns the number of cells holding a value.
    #[must_use]
    pub const fn known_count(&self) -> usize {
        self.filled.len()
    }

    /// Returns `true` once all 81 cells hold a value.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.known_count() == 81
    }

    /// Returns the grid in its current state of deduction.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the board and returns the deduced grid.
    #[must_use]
    pub const fn into_grid(self) -> Grid {
        self.grid
    }

    /// Writes `digit` into the cell at `pos` and refreshes the candidates of
    /// every open peer.
    ///
    /// Returns the peers whose refreshed candidate set has exactly one
    /// member, so a caller can cascade further assignments. Values are never
    /// overwritten; assigning to a filled cell is a logic error upstream.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if a peer is left with no
    /// candidates.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> Result<PositionSet, SolverError> {
        debug_assert!(!self.is_filled(pos), "cell {pos} is already filled");
        debug_assert!(
            self.candidates(pos).contains(digit),
            "{digit} is not a candidate at {pos}"
        );

        self.grid.set(pos, digit);
        self.filled.insert(pos);
        self.candidates[pos.cell_index()] = DigitSet::EMPTY;

        let mut singles = PositionSet::new();
        for peer in pos.peers() {
            if self.filled.contains(peer) {
                continue;
            }
            let refreshed = Self::recompute(&self.grid, peer)?;
            self.candidates[peer.cell_index()] = refreshed;
            if refreshed.single().is_some() {
                singles.insert(peer);
            }
        }
        Ok(singles)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use deduku_core::Digit;

    use super::*;

    fn sample() -> Grid {
        Grid::from_str(
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
        .unwrap()
    }

    fn assert_cache_fresh(board: &Board) {
        for pos in Position::ALL {
            if board.is_filled(pos) {
                assert!(board.candidates(pos).is_empty(), "filled cell {pos}");
                continue;
            }
            let fresh = DigitSet::ALL
                - board.grid().row(pos.row()).unwrap()
                - board.grid().column(pos.col()).unwrap()
                - board.grid().block(pos.row(), pos.col()).unwrap();
            assert_eq!(board.candidates(pos), fresh, "stale cache at {pos}");
        }
    }

    #[test]
    fn new_computes_candidates_for_open_cells() {
        let grid = sample();
        let board = Board::new(&grid).unwrap();

        // Row 0 contributes {7 4 2 8}, column 0 {7 2 8 6 4}, and the
        // top-left block {7 1 4 2}.
        let candidates = board.candidates(Position::new(0, 0));
        assert_eq!(
            candidates,
            DigitSet::from_iter([Digit::D3, Digit::D5, Digit::D9])
        );

        assert_eq!(board.known_count(), grid.known_count());
        assert!(!board.is_complete());
        assert_cache_fresh(&board);
    }

    #[test]
    fn new_rejects_a_cell_with_no_candidates() {
        // (0, 0) sees 1-8 in its row and 9 in its column.
        let grid = Grid::from_rows([
            [0, 1, 2, 3, 4, 5, 6, 7, 8],
            [9, 0, 0, 0, 0, 0, 0, 0, 0],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
            [0; 9],
        ])
        .unwrap();

        let err = Board::new(&grid).unwrap_err();
        assert_eq!(
            err,
            SolverError::Contradiction {
                pos: Position::new(0, 0)
            }
        );
    }

    #[test]
    fn assign_updates_grid_and_peers() {
        // One open cell in the top row; the rest of the grid is empty.
        let grid = Grid::from_str(
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
        .unwrap();
        let mut board = Board::new(&grid).unwrap();

        let below = Position::new(1, 0);
        assert_eq!(board.candidates(below).len(), 7);

        let singles = board.assign(Position::new(0, 0), Digit::D9).unwrap();

        assert_eq!(board.value(Position::new(0, 0)), Some(Digit::D9));
        assert!(board.is_filled(Position::new(0, 0)));
        assert!(board.candidates(Position::new(0, 0)).is_empty());

        // The cell below loses 9 but keeps six candidates, so nothing became
        // a singleton.
        assert_eq!(board.candidates(below).len(), 6);
        assert!(!board.candidates(below).contains(Digit::D9));
        assert!(singles.is_empty());
        assert_cache_fresh(&board);
    }

    #[test]
    fn assign_reports_new_singletons() {
        // (0, 0) is forced to 9 by the 3 in its column; assigning it leaves
        // (0, 1) with {3} alone.
        let grid = Grid::from_str(
            "
            __6 751 428
            ___ ___ ___
            ___ ___ ___
            3__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        ",
        )
        .unwrap();
        let mut board = Board::new(&grid).unwrap();
        assert_eq!(
            board.candidates(Position::new(0, 0)).single(),
            Some(Digit::D9)
        );

        let singles = board.assign(Position::new(0, 0), Digit::D9).unwrap();

        assert_eq!(singles.len(), 1);
        assert!(singles.contains(Position::new(0, 1)));
        assert_eq!(
            board.candidates(Position::new(0, 1)).single(),
            Some(Digit::D3)
        );
    }

    #[test]
    fn assign_detects_an_emptied_peer() {
        // Both open cells in the top row are forced to 9, one by the 3 in
        // column 0 and one by the 3 in column 1. Assigning the first leaves
        // the second with nothing.
        let grid = Grid::from_str(
            "
            __6 751 428
            ___ ___ ___
            ___ ___ ___
            3__ ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
            _3_ ___ ___
            ___ ___ ___
        ",
        )
        .unwrap();
        let mut board = Board::new(&grid).unwrap();

        let err = board.assign(Position::new(0, 0), Digit::D9).unwrap_err();
        assert_eq!(
            err,
            SolverError::Contradiction {
                pos: Position::new(0, 1)
            }
        );
    }

    #[test]
    fn into_grid_returns_the_deduced_state() {
        let grid = sample();
        let mut board = Board::new(&grid).unwrap();
        board.assign(Position::new(0, 0), Digit::D9).unwrap();

        let deduced = board.into_grid();
        assert_eq!(deduced.value(Position::new(0, 0)), Some(Digit::D9));
        assert_eq!(deduced.known_count(), grid.known_count() + 1);
    }
}
