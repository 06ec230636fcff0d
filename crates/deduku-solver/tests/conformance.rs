//! Conformance suite over the shipped puzzle fixtures.
//!
//! Each fixture pairs a puzzle with its reference solution. Run with
//! `RUST_LOG=debug` to watch the phase transitions.

use deduku_core::Fixture;
use deduku_solver::{SolveReport, Solver};

const EASY: &str = include_str!("fixtures/easy.txt");
const MEDIUM: &str = include_str!("fixtures/medium.txt");
const HARD: &str = include_str!("fixtures/hard.txt");

fn run(text: &str) -> (Fixture, SolveReport) {
    let _ = env_logger::builder().is_test(true).try_init();
    let fixture: Fixture = text.parse().unwrap();
    let report = Solver::with_all_strategies()
        .solve(&fixture.unsolved)
        .unwrap();
    (fixture, report)
}

#[test]
fn easy_fixture_solves_exactly() {
    let (fixture, report) = run(EASY);

    assert!(report.is_solved());
    assert!(report.is_correct());
    assert_eq!(report.grid(), &fixture.solved);
}

#[test]
fn medium_fixture_solves_exactly() {
    let (fixture, report) = run(MEDIUM);

    assert!(report.is_solved());
    assert!(report.is_correct());
    assert_eq!(report.grid(), &fixture.solved);
}

#[test]
fn hard_fixture_stalls_cleanly() {
    let (fixture, report) = run(HARD);
    assert_eq!(fixture.unsolved.known_count(), 22);

    // Elimination alone cannot finish this one; the partial grid must
    // still be structurally sound.
    assert!(!report.is_solved());
    assert!(report.is_correct());
    assert_ne!(report.grid(), &fixture.solved);
}
