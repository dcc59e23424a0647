//! Candidate digit sets backed by a 9-bit mask.

use std::{fmt, iter::FusedIterator};

use crate::digit::Digit;

/// A set of digits 1-9, stored as a 9-bit mask in a `u16`.
///
/// Bit `n` represents digit `n + 1`. Membership tests, insertion,
/// removal, and the singleton check are all O(1) bit operations, which
/// matters because the propagation engine performs them in its hot loop.
///
/// A cell's candidate set starts at [`DigitSet::FULL`] and only ever
/// shrinks during one solving attempt.
///
/// # Examples
///
/// ```
/// use placewise_core::{Digit, DigitSet};
///
/// let mut candidates = DigitSet::FULL;
/// candidates.remove(Digit::D5);
/// candidates.remove(Digit::D7);
///
/// assert_eq!(candidates.len(), 7);
/// assert!(!candidates.contains(Digit::D5));
/// assert_eq!(candidates.as_single(), None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitSet(u16);

const FULL_BITS: u16 = 0x01ff;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing every digit 1-9.
    pub const FULL: Self = Self(FULL_BITS);

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(bit(digit))
    }

    /// Returns `true` if `digit` is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & bit(digit) != 0
    }

    /// Adds a digit to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= bit(digit);
    }

    /// Removes a digit from the set. Removing an absent digit is a no-op.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !bit(digit);
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole digit if the set is a singleton, `None` otherwise.
    #[must_use]
    pub const fn as_single(self) -> Option<Digit> {
        if self.0.is_power_of_two() {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Some(Digit::from_value(value))
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter(self.0)
    }
}

impl Default for DigitSet {
    fn default() -> Self {
        Self::EMPTY
    }
}

const fn bit(digit: Digit) -> u16 {
    1 << (digit.value() - 1)
}

impl fmt::Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Digit>,
    {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], lowest digit first.
#[derive(Debug, Clone)]
pub struct Iter(u16);

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let digit = Digit::from_value(self.0.trailing_zeros() as u8 + 1);
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}
