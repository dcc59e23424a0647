//! Cell indexing for the 9×9 board.

use std::fmt::{self, Display};

const ROW_LETTERS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// One of the 81 positions on a 9×9 board.
///
/// Internally a cell is a dense index 0-80 in row-major order, so it can
/// be used directly to index per-cell tables. The traditional row-letter
/// plus column-digit label (`A1` top-left through `I9` bottom-right)
/// exists only at the parse and display boundary.
///
/// The `Default` cell is `A1`; it exists so cells can live in
/// default-initialized containers such as `tinyvec` arrays.
///
/// # Examples
///
/// ```
/// use placewise_core::Cell;
///
/// let cell = Cell::from_label("E5").unwrap();
/// assert_eq!(cell.row(), 4);
/// assert_eq!(cell.col(), 4);
/// assert_eq!(cell.box_index(), 4);
/// assert_eq!(cell.to_string(), "E5");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// All 81 cells in row-major order (`A1`, `A2`, .., `I9`).
    ///
    /// This is the fixed enumeration order used wherever a deterministic
    /// cell ordering matters, such as search tie-breaking.
    pub const ALL: [Self; 81] = {
        let mut all = [Self(0); 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self(i as u8);
            i += 1;
        }
        all
    };

    /// Creates a cell from its dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!(index < 81);
        Self(index)
    }

    /// Creates a cell from row and column coordinates (both 0-8).
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is out of range.
    #[must_use]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self(row * 9 + col)
    }

    /// Returns the dense index (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the row coordinate (0-8).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the column coordinate (0-8).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3×3 box containing this cell (0-8,
    /// left to right, top to bottom).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.row() / 3) * 3 + self.col() / 3
    }

    /// Parses a label such as `"C7"` (row letter `A`-`I`, column digit
    /// `1`-`9`).
    ///
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let row_ch = chars.next()?;
        let col_ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let row = ROW_LETTERS.iter().position(|&ch| ch == row_ch)?;
        let col = col_ch.to_digit(10).filter(|&d| (1..=9).contains(&d))? - 1;
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = (row as u8, col as u8);
        Some(Self::from_row_col(row, col))
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", ROW_LETTERS[self.row() as usize], self.col() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_enumeration() {
        assert_eq!(Cell::ALL.len(), 81);
        for (i, cell) in Cell::ALL.iter().enumerate() {
            assert_eq!(cell.index(), i);
        }
        assert_eq!(Cell::ALL[0].to_string(), "A1");
        assert_eq!(Cell::ALL[80].to_string(), "I9");
    }

    #[test]
    fn test_coordinates() {
        let cell = Cell::from_row_col(4, 7);
        assert_eq!(cell.row(), 4);
        assert_eq!(cell.col(), 7);
        assert_eq!(cell.index(), 43);
        assert_eq!(cell.box_index(), 5);
    }

    #[test]
    fn test_box_layout() {
        assert_eq!(Cell::from_row_col(0, 0).box_index(), 0);
        assert_eq!(Cell::from_row_col(2, 2).box_index(), 0);
        assert_eq!(Cell::from_row_col(0, 8).box_index(), 2);
        assert_eq!(Cell::from_row_col(8, 0).box_index(), 6);
        assert_eq!(Cell::from_row_col(8, 8).box_index(), 8);
    }

    #[test]
    fn test_label_round_trip() {
        for cell in Cell::ALL {
            assert_eq!(Cell::from_label(&cell.to_string()), Some(cell));
        }
    }

    #[test]
    fn test_invalid_labels() {
        assert_eq!(Cell::from_label(""), None);
        assert_eq!(Cell::from_label("A"), None);
        assert_eq!(Cell::from_label("A0"), None);
        assert_eq!(Cell::from_label("J1"), None);
        assert_eq!(Cell::from_label("A10"), None);
        assert_eq!(Cell::from_label("a1"), None);
    }

    #[test]
    #[should_panic(expected = "index < 81")]
    fn test_new_out_of_range_panics() {
        let _ = Cell::new(81);
    }
}
