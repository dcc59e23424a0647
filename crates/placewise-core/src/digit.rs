//! Sudoku digit representation.

use std::fmt::{self, Display};

/// A sudoku digit in the range 1-9.
///
/// Using an enum rather than a raw `u8` keeps out-of-range values
/// unrepresentable; the solver never has to re-validate a digit it is
/// handed.
///
/// # Examples
///
/// ```
/// use placewise_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // The character boundary used by the puzzle parser
/// assert_eq!(Digit::from_char('7'), Some(Digit::D7));
/// assert_eq!(Digit::from_char('.'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// All digits from 1 to 9, in ascending order.
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

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub const fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("digit value out of range"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Parses a single character as a digit, `'1'` through `'9'`.
    ///
    /// Returns `None` for everything else, including `'0'`, which the
    /// puzzle format treats as "cell unknown" rather than a digit.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '1' => Some(Self::D1),
            '2' => Some(Self::D2),
            '3' => Some(Self::D3),
            '4' => Some(Self::D4),
            '5' => Some(Self::D5),
            '6' => Some(Self::D6),
            '7' => Some(Self::D7),
            '8' => Some(Self::D8),
            '9' => Some(Self::D9),
            _ => None,
        }
    }

    /// Returns the character form of this digit (`'1'`..`'9'`).
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
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
