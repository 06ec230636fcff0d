//! Parsing of conformance-test fixtures.
//!
//! A fixture pairs a puzzle with its expected solution in a plain-text
//! format: the literal line `UNSOLVED`, nine rows of nine digits (`0` for an
//! unknown cell), the literal line `SOLVED`, and nine more rows. Blank lines
//! are tolerated; nothing else is.

use std::str::FromStr;

use crate::grid::{Grid, ParseGridError};

/// A puzzle and its expected solution, parsed from fixture text.
///
/// Parsing checks only the format. Whether `solved` actually solves
/// `unsolved` is for the consumer to decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixture {
    /// The puzzle as handed to a solver.
    pub unsolved: Grid,
    /// The expected fully solved grid.
    pub solved: Grid,
}

impl FromStr for Fixture {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, FixtureError> {
        let mut lines = s.lines().map(str::trim).filter(|line| !line.is_empty());
        let unsolved = parse_section(&mut lines, "UNSOLVED")?;
        let solved = parse_section(&mut lines, "SOLVED")?;
        Ok(Self { unsolved, solved })
    }
}

fn parse_section<'a, I>(lines: &mut I, marker: &'static str) -> Result<Grid, FixtureError>
where
    I: Iterator<Item = &'a str>,
{
    match lines.next() {
        Some(line) if line == marker => {}
        _ => return Err(FixtureError::MissingMarker { marker }),
    }
    let mut text = String::new();
    for index in 0..9 {
        let line = lines
            .next()
            .ok_or(FixtureError::TruncatedSection { marker })?;
        if line.len() != 9 || !line.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(FixtureError::MalformedRow {
                index,
                line: line.to_owned(),
            });
        }
        text.push_str(line);
        text.push('\n');
    }
    Ok(text.parse()?)
}

/// Errors from parsing fixture text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum FixtureError {
    /// A section did not start with its expected marker line.
    #[display("expected marker line `{marker}`")]
    MissingMarker {
        /// The marker that was expected.
        marker: &'static str,
    },
    /// A section ended before nine grid rows were read.
    #[display("section `{marker}` ended before nine grid rows")]
    TruncatedSection {
        /// Marker of the truncated section.
        marker: &'static str,
    },
    /// A grid row was not nine digits.
    #[display("grid row {index} is malformed: {line:?}")]
    MalformedRow {
        /// Zero-based row index within the section.
        index: usize,
        /// The offending line.
        line: String,
    },
    /// The assembled rows failed to parse as a grid.
    #[display("{_0}")]
    Grid(ParseGridError),
}

// A derived `From` would emit `From<&'static str>` for both marker variants.
impl From<ParseGridError> for FixtureError {
    fn from(err: ParseGridError) -> Self {
        Self::Grid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
UNSOLVED
000700428
714800050
200940010
890000001
002060700
600000049
020084005
050002174
469007000
SOLVED
936751428
714823956
285946317
893475261
542169783
671238549
127384695
358692174
469517832
";

    #[test]
    fn parses_both_sections() {
        let fixture: Fixture = SAMPLE.parse().unwrap();
        assert_eq!(fixture.unsolved.known_count(), 35);
        assert!(fixture.solved.is_complete());
    }

    #[test]
    fn tolerates_blank_lines_and_indentation() {
        let padded = SAMPLE.replace("\nSOLVED\n", "\n\n  SOLVED  \n\n");
        assert_ne!(padded, SAMPLE);
        let fixture: Fixture = padded.parse().unwrap();
        assert_eq!(fixture, SAMPLE.parse().unwrap());
    }

    #[test]
    fn rejects_missing_marker() {
        let text = SAMPLE.replace("UNSOLVED", "PUZZLE");
        assert_eq!(
            text.parse::<Fixture>(),
            Err(FixtureError::MissingMarker { marker: "UNSOLVED" }),
        );
    }

    #[test]
    fn rejects_short_section() {
        let mut truncated: String = SAMPLE.lines().take(5).collect::<Vec<_>>().join("\n");
        truncated.push('\n');
        assert_eq!(
            truncated.parse::<Fixture>(),
            Err(FixtureError::TruncatedSection { marker: "UNSOLVED" }),
        );
    }

    #[test]
    fn rejects_malformed_row() {
        let text = SAMPLE.replace("714800050", "71480005");
        assert_eq!(
            text.parse::<Fixture>(),
            Err(FixtureError::MalformedRow {
                index: 1,
                line: "71480005".to_owned(),
            }),
        );
    }

    #[test]
    fn wraps_grid_parse_errors() {
        let parse_error = ParseGridError::WrongCellCount { count: 80 };
        assert_eq!(
            FixtureError::from(parse_error),
            FixtureError::Grid(parse_error),
        );
        assert_eq!(
            FixtureError::from(parse_error).to_string(),
            "expected 81 cells, found 80",
        );
    }
}
