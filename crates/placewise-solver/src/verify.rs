//! Independent solution validation.

use placewise_core::{DigitSet, topology::UNITS};

use crate::grid::SolverGrid;

/// Checks that a grid is a genuine solution: not contradictory, every
/// cell decided, and every one of the 27 units holding exactly the
/// digits 1-9.
///
/// This deliberately re-derives everything from the candidate sets and
/// the unit tables instead of trusting the engine or the search; a bug
/// in either shows up here as `false` rather than as a wrong answer
/// reported solved.
#[must_use]
pub fn is_solved(grid: &SolverGrid) -> bool {
    if grid.is_contradiction() {
        return false;
    }
    for unit in &UNITS {
        let mut held = DigitSet::EMPTY;
        for &cell in unit {
            match grid.digit_at(cell) {
                Some(digit) => held.insert(digit),
                None => return false,
            }
        }
        if held != DigitSet::FULL {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use placewise_core::{Cell, Digit, PuzzleGrid};

    use super::*;

    const SOLVED: &str =
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382";

    fn grid_from(puzzle: &str) -> SolverGrid {
        let parsed: PuzzleGrid = puzzle.parse().unwrap();
        SolverGrid::from_puzzle(&parsed)
    }

    #[test]
    fn test_accepts_complete_solution() {
        assert!(is_solved(&grid_from(SOLVED)));
    }

    #[test]
    fn test_rejects_contradiction() {
        let mut grid = grid_from(SOLVED);
        grid.mark_contradiction();
        assert!(!is_solved(&grid));
    }

    #[test]
    fn test_rejects_undecided_cells() {
        let fresh = SolverGrid::new();
        assert!(!is_solved(&fresh));
    }

    #[test]
    fn test_rejects_duplicate_in_unit() {
        // Bypass the engine: overwrite one candidate set directly so a
        // row holds 4 twice. The validator must not assume the engine
        // prevented this.
        let mut grid = grid_from(SOLVED);
        let a2 = Cell::from_label("A2").unwrap();
        grid.candidates[a2.index()] = placewise_core::DigitSet::from_elem(Digit::D4);
        assert!(!is_solved(&grid));
    }

    #[test]
    fn test_every_unit_holds_all_digits() {
        let grid = grid_from(SOLVED);
        for unit in &UNITS {
            let held: DigitSet = unit
                .iter()
                .filter_map(|&cell| grid.digit_at(cell))
                .collect();
            assert_eq!(held, DigitSet::FULL);
        }
    }
}
