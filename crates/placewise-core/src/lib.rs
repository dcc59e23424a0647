//! Board model for the Placewise Sudoku solver.
//!
//! This crate holds the puzzle-independent parts of the solver: digits,
//! candidate sets, cell indexing, the fixed board topology (units and
//! peers), and the lenient 81-character puzzle parser. It contains no
//! solving logic; the propagation engine and search live in
//! `placewise-solver`.

pub mod cell;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod topology;

// Re-export commonly used types
pub use self::{
    cell::Cell,
    digit::Digit,
    digit_set::DigitSet,
    grid::{ParseGridError, PuzzleGrid},
};
