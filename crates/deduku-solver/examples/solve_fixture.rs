//! Example solving a puzzle fixture from disk.
//!
//! This example shows how to:
//! - Parse the `UNSOLVED`/`SOLVED` fixture format
//! - Run the solver and read the report
//! - Compare the deduced grid against the reference solution
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_fixture -- crates/deduku-solver/tests/fixtures/easy.txt
//! ```
//!
//! Watch the phase transitions while solving:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example solve_fixture -- crates/deduku-solver/tests/fixtures/hard.txt
//! ```

use std::{fs, path::PathBuf, process};

use clap::Parser;
use deduku_core::{Fixture, Grid};
use deduku_solver::Solver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to a fixture file with UNSOLVED and SOLVED sections.
    #[arg(value_name = "FIXTURE")]
    fixture: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = match fs::read_to_string(&args.fixture) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Cannot read {}: {err}", args.fixture.display());
            process::exit(1);
        }
    };
    let fixture: Fixture = match text.parse() {
        Ok(fixture) => fixture,
        Err(err) => {
            eprintln!("Cannot parse {}: {err}", args.fixture.display());
            process::exit(1);
        }
    };

    let solver = Solver::with_all_strategies();
    let report = match solver.solve(&fixture.unsolved) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Solving failed: {err}");
            process::exit(1);
        }
    };

    println!("Puzzle:");
    print_grid(&fixture.unsolved);
    println!("Deduced:");
    print_grid(report.grid());

    println!("Report:");
    println!("  phase: {:?}", report.phase());
    println!("  solved: {}", report.is_solved());
    println!("  correct: {}", report.is_correct());
    println!("  solving time: {:.6}s", report.solving_time());
    println!("  rounds: {}", report.stats().rounds());
    for (strategy, count) in solver
        .strategies()
        .iter()
        .zip(report.stats().applications())
    {
        println!("  {}: {count}", strategy.name());
    }
    println!();

    if report.grid() == &fixture.solved {
        println!("The deduced grid matches the SOLVED section.");
    } else {
        println!("The deduced grid does not match the SOLVED section.");
    }
}

fn print_grid(grid: &Grid) {
    for line in grid.to_string().lines() {
        println!("  {line}");
    }
    println!();
}
