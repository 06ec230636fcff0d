//! The solve loop: a phase machine over propagation rounds.

use std::time::Instant;

use deduku_core::Grid;

use crate::{
    Board, SolverError,
    strategy::{self, BoxedStrategy},
    validator,
};

/// The phase a solve run is in.
///
/// A run starts in `Initializing` and cycles through `Propagating` rounds
/// until a round deduces nothing new, reaching `Fixpoint`. From there it
/// ends in `Solved` or `Unsolved`; input that fails validation ends in
/// `Invalid` without any propagation. Every transition is logged with
/// `log::debug!`, so `RUST_LOG=debug` traces a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolvePhase {
    /// Validating the input and computing the initial candidate sets.
    Initializing,
    /// Running every strategy to exhaustion, in order.
    Propagating,
    /// A full round deduced nothing new; deciding how to finish.
    Fixpoint,
    /// Terminal: all 81 cells are known.
    Solved,
    /// Terminal: open cells remain and no strategy makes progress.
    Unsolved,
    /// Terminal: the input failed validation and was never propagated.
    Invalid,
}

/// Statistics collected during a solve run.
///
/// # Examples
///
/// ```
/// use deduku_core::Grid;
/// use deduku_solver::Solver;
///
/// let solver = Solver::with_all_strategies();
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
/// let report = solver.solve(&grid)?;
/// for (strategy, count) in solver
///     .strategies()
///     .iter()
///     .zip(report.stats().applications())
/// {
///     println!("{}: {count} passes", strategy.name());
/// }
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveStats {
    applications: Vec<usize>,
    rounds: usize,
}

impl SolveStats {
    /// Returns per-strategy counts of passes that made progress, in solver
    /// order.
    ///
    /// Strategies that never made progress keep a count of `0`. The index
    /// mapping is defined by [`Solver::strategies`].
    #[must_use]
    pub fn applications(&self) -> &[usize] {
        &self.applications
    }

    /// Returns the number of propagation rounds that ran.
    ///
    /// The final round is always an empty one that confirms the fixpoint.
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// Returns the total number of passes that made progress.
    #[must_use]
    pub fn total_applications(&self) -> usize {
        self.applications.iter().sum()
    }
}

/// The outcome of one solve run.
///
/// Carries the deduced grid (or the input echoed back when validation
/// failed), the terminal [`SolvePhase`], the validator's verdict on the
/// final grid, the wall-clock solving time, and the collected
/// [`SolveStats`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveReport {
    grid: Grid,
    phase: SolvePhase,
    correct: bool,
    solving_time: f64,
    stats: SolveStats,
}

impl SolveReport {
    /// Returns the grid after solving.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the terminal phase the run ended in.
    #[must_use]
    pub const fn phase(&self) -> SolvePhase {
        self.phase
    }

    /// Returns `true` if all 81 cells were deduced.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase.is_solved()
    }

    /// Returns `true` if the final grid passed validation.
    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.correct
    }

    /// Returns the wall-clock solve duration in seconds.
    #[must_use]
    pub const fn solving_time(&self) -> f64 {
        self.solving_time
    }

    /// Returns the statistics collected during the run.
    #[must_use]
    pub const fn stats(&self) -> &SolveStats {
        &self.stats
    }

    /// Consumes the report and returns the grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

/// A solver that runs elimination strategies to a fixpoint.
///
/// `Solver` holds an ordered list of strategies. Each propagation round runs
/// every strategy to exhaustion, in order; rounds repeat while the number of
/// known cells keeps growing. The strategies never guess, so a run either
/// solves the puzzle or stalls with every deduction made so far intact.
///
/// A `Solver` borrows nothing, so one instance can serve several threads at
/// once.
///
/// # Examples
///
/// ```
/// use deduku_core::Grid;
/// use deduku_solver::Solver;
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
/// let report = Solver::with_all_strategies().solve(&grid)?;
/// assert!(report.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    strategies: Vec<BoxedStrategy>,
}

impl Solver {
    /// Creates a solver with the given strategies.
    ///
    /// Strategies are applied in the order they appear in the vector.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self { strategies }
    }

    /// Creates a solver with all available strategies, cheapest first.
    #[must_use]
    pub fn with_all_strategies() -> Self {
        Self {
            strategies: strategy::all_strategies(),
        }
    }

    /// Returns the configured strategies in application order.
    ///
    /// The returned slice defines the index mapping used by
    /// [`SolveStats::applications`].
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Solves a puzzle as far as elimination reaches.
    ///
    /// The input is validated first; an invalid puzzle is echoed back in an
    /// `Ok` report with the [`Invalid`](SolvePhase::Invalid) phase and no
    /// propagation at all. Otherwise rounds of elimination run until a round
    /// deduces nothing new, and the report carries the final grid along with
    /// the validator's verdict on it.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] if every candidate for some
    /// cell is eliminated, either while computing the initial candidate sets
    /// or by a later assignment.
    pub fn solve(&self, grid: &Grid) -> Result<SolveReport, SolverError> {
        let start = Instant::now();
        let mut stats = SolveStats {
            applications: vec![0; self.strategies.len()],
            rounds: 0,
        };

        let mut phase = SolvePhase::Initializing;
        if !validator::is_correct(grid) {
            let next = SolvePhase::Invalid;
            log::debug!("{phase:?} -> {next:?}");
            return Ok(SolveReport {
                grid: *grid,
                phase: next,
                correct: false,
                solving_time: start.elapsed().as_secs_f64(),
                stats,
            });
        }

        let mut board = Board::new(grid)?;
        let terminal = loop {
            let next = match phase {
                SolvePhase::Initializing => SolvePhase::Propagating,
                SolvePhase::Propagating => self.run_round(&mut board, &mut stats)?,
                SolvePhase::Fixpoint => {
                    if board.is_complete() {
                        SolvePhase::Solved
                    } else {
                        SolvePhase::Unsolved
                    }
                }
                terminal => break terminal,
            };
            log::debug!("{phase:?} -> {next:?}");
            phase = next;
        };

        let deduced = board.into_grid();
        let correct = validator::is_correct(&deduced);
        Ok(SolveReport {
            grid: deduced,
            phase: terminal,
            correct,
            solving_time: start.elapsed().as_secs_f64(),
            stats,
        })
    }

    /// Runs one round: every strategy to exhaustion, in order.
    fn run_round(
        &self,
        board: &mut Board,
        stats: &mut SolveStats,
    ) -> Result<SolvePhase, SolverError> {
        stats.rounds += 1;
        let before = board.known_count();
        for (index, strategy) in self.strategies.iter().enumerate() {
            while strategy.apply(board)? {
                stats.applications[index] += 1;
            }
        }
        let after = board.known_count();
        log::debug!("round {}: {before} -> {after} known cells", stats.rounds);

        if after > before {
            Ok(SolvePhase::Propagating)
        } else {
            Ok(SolvePhase::Fixpoint)
        }
    }
}
