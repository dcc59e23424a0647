//! Constraint propagation: the `assign`/`eliminate` pair.
//!
//! These two operations are mutually recursive on purpose. Eliminating
//! a candidate can force a cell (peer rule) or force a unit placement
//! (unit rule), each of which assigns, which eliminates further. The
//! chain terminates because every successful elimination strictly
//! shrinks some cell's candidate set and sets cannot shrink below one
//! candidate without failing, so recursion depth is bounded by the
//! 81×9 state space.

use placewise_core::{
    Cell, Digit,
    topology::{peers_of, units_of},
};
use tinyvec::ArrayVec;

use crate::grid::SolverGrid;

/// A dead end: some cell lost its last candidate, or some unit has no
/// remaining place for a digit.
///
/// This is the engine's internal failure signal. It carries no payload
/// because contradictions are frequent and must be cheap to produce
/// and discard; the grid that failed records the terminal state via
/// [`SolverGrid::is_contradiction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("contradiction detected during propagation")]
pub struct Contradiction;

impl SolverGrid {
    /// Commits `cell` to `digit` by eliminating every other candidate
    /// there, propagating each elimination fully.
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] if any elimination dead-ends; the grid
    /// is left in the contradiction state.
    pub fn assign(&mut self, cell: Cell, digit: Digit) -> Result<(), Contradiction> {
        if self.contradiction {
            return Err(Contradiction);
        }
        for other in self.candidates_at(cell) {
            if other != digit {
                self.eliminate(cell, other)?;
            }
        }
        Ok(())
    }

    /// Removes `digit` from the candidates of `cell` and propagates the
    /// consequences.
    ///
    /// Already-absent digits succeed trivially, which makes elimination
    /// idempotent. Otherwise, after removal:
    ///
    /// - a cell left with no candidates is a contradiction;
    /// - a cell reduced to a single candidate has that candidate
    ///   eliminated from all 20 peers (peer rule);
    /// - every unit of `cell` is rescanned for where `digit` can still
    ///   go: no place is a contradiction, exactly one place forces an
    ///   [`assign`](Self::assign) there (unit rule).
    ///
    /// # Errors
    ///
    /// Returns [`Contradiction`] on any dead end; the grid is left in
    /// the contradiction state.
    pub fn eliminate(&mut self, cell: Cell, digit: Digit) -> Result<(), Contradiction> {
        if self.contradiction {
            return Err(Contradiction);
        }
        let i = cell.index();
        if !self.candidates[i].contains(digit) {
            return Ok(());
        }
        self.candidates[i].remove(digit);

        let remaining = self.candidates[i];
        if remaining.is_empty() {
            // some peer forced the last candidate out of this cell
            return self.fail();
        }
        if let Some(forced) = remaining.as_single() {
            for &peer in peers_of(cell) {
                self.eliminate(peer, forced)?;
            }
        }

        for unit in units_of(cell) {
            let mut places: ArrayVec<[Cell; 9]> = ArrayVec::new();
            for &other in unit {
                if self.candidates[other.index()].contains(digit) {
                    places.push(other);
                }
            }
            match places.as_slice() {
                [] => return self.fail(),
                &[only] => self.assign(only, digit)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn fail(&mut self) -> Result<(), Contradiction> {
        self.mark_contradiction();
        Err(Contradiction)
    }
}
