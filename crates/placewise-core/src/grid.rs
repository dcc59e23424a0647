//! Puzzle input grid and the 81-character parser.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{cell::Cell, digit::Digit};

/// Error returned when a puzzle string does not contain exactly 81
/// recognized characters.
///
/// Recognized characters are the digits `1`-`9` plus `0` and `.` for
/// unknown cells; everything else (whitespace, separators, grid art) is
/// filtered out before counting, so only the cell count can fail here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("malformed grid: expected 81 recognized characters, found {found}")]
pub struct ParseGridError {
    /// Number of recognized characters found in the input.
    pub found: usize,
}

/// A parsed puzzle: the given clues, before any solving.
///
/// Each of the 81 cells either holds a clue digit or is unknown. This is
/// purely the format layer; applying the clues to a candidate grid (and
/// detecting clue conflicts) is the solver's job.
///
/// # Examples
///
/// ```
/// use placewise_core::{Cell, Digit, PuzzleGrid};
///
/// let grid: PuzzleGrid = "4.....8.5\
///                         .3.......\
///                         ...7.....\
///                         .2.....6.\
///                         ....8.4..\
///                         ....1....\
///                         ...6.3.7.\
///                         5..2.....\
///                         1.4......"
///     .parse()
///     .unwrap();
/// assert_eq!(grid.clue(Cell::from_label("A1").unwrap()), Some(Digit::D4));
/// assert_eq!(grid.clue(Cell::from_label("A2").unwrap()), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleGrid {
    cells: [Option<Digit>; 81],
}

impl PuzzleGrid {
    /// Returns the clue at `cell`, or `None` for an unknown cell.
    #[must_use]
    pub const fn clue(self, cell: Cell) -> Option<Digit> {
        self.cells[cell.index()]
    }

    /// Iterates over all given clues in row-major cell order.
    pub fn clues(&self) -> impl Iterator<Item = (Cell, Digit)> + '_ {
        Cell::ALL
            .iter()
            .filter_map(|&cell| self.cells[cell.index()].map(|digit| (cell, digit)))
    }

    /// Returns the number of given clues.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }
}

impl FromStr for PuzzleGrid {
    type Err = ParseGridError;

    /// Parses a flattened puzzle string.
    ///
    /// Lenient about formatting, strict about cell count: characters
    /// other than `1`-`9`, `0`, and `.` are skipped (so line breaks and
    /// grid decorations are fine), but exactly 81 recognized characters
    /// must remain.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut count = 0;
        for ch in s.chars() {
            let clue = match ch {
                '0' | '.' => None,
                ch => match Digit::from_char(ch) {
                    Some(digit) => Some(digit),
                    None => continue,
                },
            };
            if count < 81 {
                cells[count] = clue;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError { found: count });
        }
        Ok(Self { cells })
    }
}

impl Display for PuzzleGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                let ch = match self.cells[Cell::from_row_col(row, col).index()] {
                    Some(digit) => digit.to_char(),
                    None => '.',
                };
                write!(f, "{ch}")?;
                match col {
                    2 | 5 => write!(f, " | ")?,
                    8 => {}
                    _ => write!(f, " ")?,
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "------+-------+------")?;
            }
        }
        Ok(())
    }
}
