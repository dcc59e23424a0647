//! Constraint-propagation Sudoku solving engine.
//!
//! The solver combines two parts, in the classic propagate-then-search
//! shape:
//!
//! - [`SolverGrid::assign`] and [`SolverGrid::eliminate`], a mutually
//!   recursive constraint engine that keeps every cell's candidate set
//!   consistent with its 20 peers and 3 units;
//! - [`search`], depth-first backtracking with the
//!   most-constrained-cell heuristic, for the puzzles propagation alone
//!   cannot finish.
//!
//! The [`solve`] entry point ties them together and independently
//! validates the result before reporting it solved.
//!
//! # Examples
//!
//! ```
//! use placewise_core::Cell;
//! use placewise_solver::solve;
//!
//! let puzzle =
//!     "003020600900305001001806400008102900700000008006708200002609500800203009005010300";
//! let solution = solve(puzzle)?;
//! assert!(solution.solved());
//!
//! let a1 = Cell::from_label("A1").unwrap();
//! assert_eq!(solution.digit_at(a1).unwrap().value(), 4);
//! # Ok::<(), placewise_core::ParseGridError>(())
//! ```

use placewise_core::{Cell, Digit, ParseGridError, PuzzleGrid};

pub use self::{engine::Contradiction, grid::SolverGrid, search::search, verify::is_solved};

mod engine;
mod grid;
mod search;
pub mod verify;

/// The outcome of one solving attempt.
///
/// A failed solve carries no partial result: when [`solved`] is
/// `false` the grid is in the contradiction state, so a caller cannot
/// mistake it for an almost-correct answer.
///
/// [`solved`]: Solution::solved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    solved: bool,
    grid: SolverGrid,
}

impl Solution {
    /// Returns `true` if the puzzle was solved and the result passed
    /// validation.
    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    /// Returns the final grid: fully determined on success, the
    /// contradiction marker otherwise.
    #[must_use]
    pub const fn grid(&self) -> &SolverGrid {
        &self.grid
    }

    /// Looks up the final digit of one cell.
    ///
    /// ```
    /// use placewise_core::Cell;
    /// use placewise_solver::solve;
    ///
    /// let solution = solve(
    ///     "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
    /// )?;
    /// let e5 = Cell::from_label("E5").unwrap();
    /// assert_eq!(solution.digit_at(e5).unwrap().value(), 6);
    /// # Ok::<(), placewise_core::ParseGridError>(())
    /// ```
    #[must_use]
    pub const fn digit_at(&self, cell: Cell) -> Option<Digit> {
        self.grid.digit_at(cell)
    }

    /// Returns `true` if the final grid is in the contradiction state.
    ///
    /// Harness code checks this before trying to display a grid.
    #[must_use]
    pub const fn is_contradiction(&self) -> bool {
        self.grid.is_contradiction()
    }
}

/// Solves one puzzle given as a flattened string.
///
/// The input must contain exactly 81 recognized characters (digits
/// `1`-`9`, plus `0` or `.` for unknown cells) after filtering;
/// anything else in the string, such as line breaks or grid art, is
/// ignored. A raw line from a puzzle-per-line file can be passed in
/// unmodified.
///
/// An unsolvable puzzle is not an error: it comes back as a
/// [`Solution`] with [`solved`](Solution::solved) `false`.
///
/// # Errors
///
/// Returns [`ParseGridError`] if the filtered input does not have
/// exactly 81 characters. This is detected before any propagation
/// starts.
pub fn solve(puzzle: &str) -> Result<Solution, ParseGridError> {
    let parsed: PuzzleGrid = puzzle.parse()?;
    let start = SolverGrid::from_puzzle(&parsed);
    match search(start.clone()) {
        Some(grid) => {
            let solved = verify::is_solved(&grid);
            Ok(Solution { solved, grid })
        }
        None => {
            let mut grid = start;
            grid.mark_contradiction();
            Ok(Solution {
                solved: false,
                grid,
            })
        }
    }
}
