//! Candidate grid state for solving.

use std::fmt::{self, Display};

use placewise_core::{Cell, Digit, DigitSet, PuzzleGrid};

/// Solver state: one candidate set per cell, plus the contradiction
/// marker.
///
/// A fresh grid gives every cell the full digit set. The propagation
/// engine ([`assign`]/[`eliminate`]) shrinks candidate sets in place;
/// the search clones the grid before each trial assignment so sibling
/// branches never observe each other's mutations.
///
/// Once a contradiction is detected the grid enters a sticky terminal
/// state: it is never mutated again and every query short-circuits.
/// Contradictions are expected and frequent (most search branches end
/// in one), so the marker is a flag on the value rather than an error
/// to unwind.
///
/// [`assign`]: SolverGrid::assign
/// [`eliminate`]: SolverGrid::eliminate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverGrid {
    pub(crate) candidates: [DigitSet; 81],
    pub(crate) contradiction: bool,
}

impl Default for SolverGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverGrid {
    /// Creates a grid with every digit still possible in every cell.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            candidates: [DigitSet::FULL; 81],
            contradiction: false,
        }
    }

    /// Builds a grid from parsed clues by assigning each clue with full
    /// propagation.
    ///
    /// If any clue assignment fails — two clues in one unit forcing the
    /// same digit, say — the returned grid is in the contradiction
    /// state. The puzzle's format was already valid, so this is a
    /// solvability verdict, not a parse error.
    #[must_use]
    pub fn from_puzzle(puzzle: &PuzzleGrid) -> Self {
        let mut grid = Self::new();
        for (cell, digit) in puzzle.clues() {
            if grid.assign(cell, digit).is_err() {
                break;
            }
        }
        grid
    }

    /// Returns the candidate set at `cell`.
    #[must_use]
    pub const fn candidates_at(&self, cell: Cell) -> DigitSet {
        self.candidates[cell.index()]
    }

    /// Returns the decided digit at `cell`, or `None` while more than
    /// one candidate remains.
    #[must_use]
    pub const fn digit_at(&self, cell: Cell) -> Option<Digit> {
        self.candidates[cell.index()].as_single()
    }

    /// Returns `true` if this grid has been proven unsolvable.
    #[must_use]
    pub const fn is_contradiction(&self) -> bool {
        self.contradiction
    }

    /// Returns `true` if every cell is down to exactly one candidate.
    ///
    /// Note this says nothing about the unit constraints actually
    /// holding; see [`crate::verify::is_solved`] for the full check.
    #[must_use]
    pub fn is_determined(&self) -> bool {
        !self.contradiction && self.candidates.iter().all(|set| set.len() == 1)
    }

    pub(crate) const fn mark_contradiction(&mut self) {
        self.contradiction = true;
    }
}

impl Display for SolverGrid {
    /// Renders the candidate grid, each cell centered in a column wide
    /// enough for the largest remaining candidate set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contradiction {
            return writeln!(f, "**NO SOLUTION IS FOUND**");
        }

        let width = 1 + self
            .candidates
            .iter()
            .map(|set| set.len())
            .max()
            .unwrap_or(1);
        let bar = "-".repeat(width * 3);
        let line = format!("{bar}+{bar}+{bar}");

        for row in 0..9 {
            for col in 0..9 {
                let text = self.candidates[Cell::from_row_col(row, col).index()].to_string();
                let leading = (width - text.len()) / 2;
                let trailing = width - text.len() - leading;
                write!(
                    f,
                    "{:leading$}{text}{:trailing$}",
                    "", ""
                )?;
                if col == 2 || col == 5 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row == 2 || row == 5 {
                writeln!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_grid() {
        let grid = SolverGrid::new();
        assert!(!grid.is_contradiction());
        assert!(!grid.is_determined());
        for cell in Cell::ALL {
            assert_eq!(grid.candidates_at(cell), DigitSet::FULL);
            assert_eq!(grid.digit_at(cell), None);
        }
    }

    #[test]
    fn test_from_puzzle_applies_clues() {
        let puzzle: PuzzleGrid = "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......"
            .parse()
            .unwrap();
        let grid = SolverGrid::from_puzzle(&puzzle);
        assert!(!grid.is_contradiction());

        let a1 = Cell::from_label("A1").unwrap();
        assert_eq!(grid.digit_at(a1), Some(Digit::D4));
        // a peer of A1 in the same row can no longer hold 4
        let a2 = Cell::from_label("A2").unwrap();
        assert!(!grid.candidates_at(a2).contains(Digit::D4));
    }

    #[test]
    fn test_from_puzzle_conflicting_clues() {
        // Two 1s in the same row: format is valid, propagation is not.
        let puzzle: PuzzleGrid = format!("11{}", ".".repeat(79)).parse().unwrap();
        let grid = SolverGrid::from_puzzle(&puzzle);
        assert!(grid.is_contradiction());
    }

    #[test]
    fn test_contradiction_display() {
        let mut grid = SolverGrid::new();
        grid.mark_contradiction();
        assert!(grid.to_string().contains("NO SOLUTION"));
    }
}
