//! A known cell value in the range 1-9.

use std::fmt::{self, Display};

/// One of the nine sudoku digits.
///
/// Grids store unknown cells as `0`; a `Digit` is only ever a known value, so
/// code that holds one never has to re-check the zero case.
///
/// # Examples
///
/// ```
/// use deduku_core::Digit;
///
/// let digit = Digit::from_value(4);
/// assert_eq!(digit, Digit::D4);
/// assert_eq!(digit.value(), 4);
/// assert_eq!(Digit::try_from_value(0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Digit {
    /// Digit 1.
    D1 = 1,
    /// Digit 2.
    D2 = 2,
    /// Digit 3.
    D3 = 3,
    /// Digit 4.
    D4 = 4,
    /// Digit 5.
    D5 = 5,
    /// Digit 6.
    D6 = 6,
    /// Digit 7.
    D7 = 7,
    /// Digit 8.
    D8 = 8,
    /// Digit 9.
    D9 = 9,
}

impl Digit {
    /// All nine digits in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9, or `None` for anything
    /// else (including the unknown-cell marker `0`).
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the range 1-9.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        match Self::try_from_value(value) {
            Some(digit) => digit,
            None => panic!("digit value out of range 1-9"),
        }
    }

    /// Returns the numeric value, 1-9.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_round_trip() {
        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(Digit::try_from_value(digit.value()), Some(digit));
        }
    }

    #[test]
    fn all_is_ascending() {
        assert_eq!(Digit::ALL.len(), 9);
        for (index, digit) in Digit::ALL.iter().enumerate() {
            assert_eq!(digit.value() as usize, index + 1);
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(10), None);
        assert_eq!(Digit::try_from_value(255), None);
    }

    #[test]
    #[should_panic(expected = "digit value out of range")]
    fn from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }

    #[test]
    fn display_matches_value() {
        assert_eq!(Digit::D1.to_string(), "1");
        assert_eq!(Digit::D9.to_string(), "9");
    }
}
