//! Plausibility checks for puzzles and deduced grids.

use deduku_core::{DigitSet, Grid, Position};

/// The smallest number of clues a uniquely solvable puzzle can have.
///
/// Grids with fewer known cells are rejected outright.
pub const MIN_CLUES: usize = 17;

/// Checks whether a grid is a plausible puzzle state.
///
/// Returns `true` if:
///
/// - At least [`MIN_CLUES`] cells are known
/// - No row, column, or block holds the same digit twice
///
/// A complete grid passing both checks is a solved puzzle: nine distinct
/// digits in every group. A partial grid passing them may still turn out to
/// be unsolvable. The check itself never fails, any grid can be inspected.
///
/// # Examples
///
/// ```
/// use deduku_core::Grid;
/// use deduku_solver::validator;
///
/// let puzzle: Grid = "
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
/// assert!(validator::is_correct(&puzzle));
/// assert!(!validator::is_correct(&Grid::new()));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn is_correct(grid: &Grid) -> bool {
    if grid.known_count() < MIN_CLUES {
        return false;
    }
    for index in 0..9 {
        let row = (0..9).map(|col| Position::new(index, col));
        let column = (0..9).map(|row| Position::new(row, index));
        if !no_duplicates(grid, row) || !no_duplicates(grid, column) {
            return false;
        }
    }
    for corner_row in [0, 3, 6] {
        for corner_col in [0, 3, 6] {
            let block = (0..3).flat_map(|r| {
                (0..3).map(move |c| Position::new(corner_row + r, corner_col + c))
            });
            if !no_duplicates(grid, block) {
                return false;
            }
        }
    }
    true
}

/// Walks the known cells of one group with a seen-mask.
///
/// The set-returning `Grid` accessors collapse repeats, so duplicates are
/// only observable cell by cell.
fn no_duplicates<I>(grid: &Grid, cells: I) -> bool
where
    I: IntoIterator<Item = Position>,
{
    let mut seen = DigitSet::EMPTY;
    for pos in cells {
        if let Some(digit) = grid.value(pos) {
            if !seen.insert(digit) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn parse(s: &str) -> Grid {
        s.parse().unwrap()
    }

    #[test]
    fn accepts_a_clean_puzzle() {
        let grid = parse(
            "
            ___7__428
            7148___5_
            2__94__1_
            89______1
            __2_6_7__
            6______49
            _2__84__5
            _5___2174
            469__7___
        ",
        );

        assert!(is_correct(&grid));
    }

    #[test]
    fn accepts_a_solved_puzzle() {
        let grid = parse(
            "
            936751428
            714823956
            285946317
            893475261
            542169783
            671238549
            127384695
            358692174
            469517832
        ",
        );

        assert!(is_correct(&grid));
    }

    #[test]
    fn rejects_too_few_clues() {
        // 16 clues, one short of the minimum, with no duplicates anywhere.
        let grid = parse(
            "
            123456789
            456_____1
            789______
            _________
            _________
            _________
            _________
            _________
            _________
        ",
        );

        assert_eq!(grid.known_count(), 16);
        assert!(!is_correct(&grid));
    }

    #[test]
    fn rejects_a_row_duplicate() {
        // Row 8 holds two 6s; columns and blocks stay clean.
        let grid = parse(
            "
            ___7__428
            7148___5_
            2__94__1_
            89______1
            __2_6_7__
            6______49
            _2__84__5
            _5___2174
            469__76__
        ",
        );

        assert!(!is_correct(&grid));
    }

    #[test]
    fn rejects_a_column_duplicate() {
        // Column 0 holds two 7s; every row and block stays clean.
        let grid = parse(
            "
            ___7__428
            7148___5_
            2__94__1_
            89______1
            __2_6_7__
            6______49
            72__84__5
            _5___2174
            469__7___
        ",
        );

        assert!(!is_correct(&grid));
    }

    #[test]
    fn rejects_a_block_duplicate() {
        // The middle block holds two 6s in different rows and columns, so
        // only the block walk can see the repeat.
        let grid = parse(
            "
            ___7__428
            7148___5_
            2__94__1_
            89_6____1
            __2_6_7__
            6______49
            _2__84__5
            _5___2174
            469__7___
        ",
        );

        assert!(!is_correct(&grid));
    }

    #[test]
    fn rejects_a_broken_solution() {
        // Complete grid with two cells traded between rows 0 and 6.
        let grid = parse(
            "
            136751428
            714823956
            285946317
            893475261
            542169783
            671238549
            927384695
            358692174
            469517832
        ",
        );

        assert!(grid.is_complete());
        assert!(!is_correct(&grid));
    }

    proptest! {
        // Arbitrary cell values never make the check panic, whatever the
        // verdict turns out to be.
        #[test]
        fn never_panics(rows in prop::array::uniform9(prop::array::uniform9(0_u8..=9))) {
            let grid = Grid::from_rows(rows).unwrap();
            let _ = is_correct(&grid);
        }
    }
}
