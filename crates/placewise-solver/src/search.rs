//! Depth-first backtracking search over the propagation engine.

use placewise_core::Cell;

use crate::grid::SolverGrid;

/// Searches for a fully determined grid by trial assignment and
/// backtracking.
///
/// Propagation alone finishes easy puzzles; for the rest, this picks
/// the unresolved cell with the fewest remaining candidates (ties
/// broken by the first such cell in [`Cell::ALL`] order, which keeps
/// runs reproducible), tries each of its candidates on an independent
/// clone of the grid, and recurses. The first branch that reaches a
/// fully determined grid wins; if every candidate of the chosen cell
/// dead-ends, this branch reports failure by returning `None`.
///
/// Branch isolation comes from the clone: a failed sibling can never
/// contaminate the grid another branch starts from.
#[must_use]
pub fn search(grid: SolverGrid) -> Option<SolverGrid> {
    if grid.is_contradiction() {
        return None;
    }
    let Some(cell) = most_constrained_cell(&grid) else {
        // every cell is a singleton
        return Some(grid);
    };
    for digit in grid.candidates_at(cell) {
        let mut branch = grid.clone();
        if branch.assign(cell, digit).is_ok()
            && let Some(found) = search(branch)
        {
            return Some(found);
        }
    }
    None
}

/// Returns the first cell with the fewest candidates above one, or
/// `None` when the grid is fully determined.
fn most_constrained_cell(grid: &SolverGrid) -> Option<Cell> {
    let mut best: Option<(usize, Cell)> = None;
    for cell in Cell::ALL {
        let len = grid.candidates_at(cell).len();
        if len > 1 && best.is_none_or(|(min, _)| len < min) {
            if len == 2 {
                // cannot do better than a binary branch
                return Some(cell);
            }
            best = Some((len, cell));
        }
    }
    best.map(|(_, cell)| cell)
}

#[cfg(test)]
mod tests {
    use placewise_core::{Digit, PuzzleGrid};

    use super::*;
    use crate::verify::is_solved;

    fn grid_from(puzzle: &str) -> SolverGrid {
        let parsed: PuzzleGrid = puzzle.parse().unwrap();
        SolverGrid::from_puzzle(&parsed)
    }

    #[test]
    fn test_contradictory_grid_fails_immediately() {
        let mut grid = SolverGrid::new();
        grid.mark_contradiction();
        assert!(search(grid).is_none());
    }

    #[test]
    fn test_determined_grid_is_returned_as_is() {
        let solved = grid_from(
            "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
        );
        // propagation alone finishes this puzzle
        assert!(solved.is_determined());
        let found = search(solved.clone()).unwrap();
        assert_eq!(found, solved);
    }

    #[test]
    fn test_hard_puzzle_needs_backtracking() {
        let start = grid_from(
            "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......",
        );
        assert!(!start.is_determined());
        let found = search(start).unwrap();
        assert!(is_solved(&found));
    }

    #[test]
    fn test_exhausted_search_reports_failure() {
        // Three cells of row A restricted to the same two candidates:
        // propagation has nothing to act on, but two digits cannot fill
        // three cells, so every branch must dead-end.
        let mut grid = SolverGrid::new();
        for label in ["A1", "A2", "A3"] {
            let cell = Cell::from_label(label).unwrap();
            for digit in Digit::ALL {
                if digit != Digit::D1 && digit != Digit::D2 {
                    grid.eliminate(cell, digit).unwrap();
                }
            }
        }
        assert!(!grid.is_contradiction());
        assert!(search(grid).is_none());
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let start = grid_from(
            "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......",
        );
        let a = most_constrained_cell(&start);
        let b = most_constrained_cell(&start);
        assert_eq!(a, b);
        // the chosen cell genuinely has the minimum branching factor
        let chosen = a.unwrap();
        let min = Cell::ALL
            .iter()
            .map(|&cell| start.candidates_at(cell).len())
            .filter(|&len| len > 1)
            .min()
            .unwrap();
        assert_eq!(start.candidates_at(chosen).len(), min);
    }

    #[test]
    fn test_blank_grid_terminates_with_a_valid_completion() {
        let start = grid_from(&".".repeat(81));
        let found = search(start).unwrap();
        assert!(is_solved(&found));
    }
}
