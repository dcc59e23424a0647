//! Fixed board topology: units and peers.
//!
//! The 9×9 board has 27 units (9 rows, 9 columns, 9 boxes), each a group
//! of 9 cells that must hold every digit exactly once. Two cells are
//! peers when they share at least one unit; every cell has exactly 20
//! peers (3 units × 8 other cells, minus the 4 cells counted twice by
//! the row/box and column/box overlaps).
//!
//! All tables here are computed at compile time from the board geometry
//! and are pure read-only data; nothing puzzle-specific lives in this
//! module.

use crate::cell::Cell;

/// The 27 units: rows 0-8, then columns 9-17, then boxes 18-26.
pub const UNITS: [[Cell; 9]; 27] = {
    let mut units = [[Cell::new(0); 9]; 27];
    let mut i = 0;
    #[expect(clippy::cast_possible_truncation)]
    while i < 9 {
        let mut j = 0;
        while j < 9 {
            units[i][j] = Cell::from_row_col(i as u8, j as u8);
            units[9 + i][j] = Cell::from_row_col(j as u8, i as u8);
            let row = (i / 3) * 3 + j / 3;
            let col = (i % 3) * 3 + j % 3;
            units[18 + i][j] = Cell::from_row_col(row as u8, col as u8);
            j += 1;
        }
        i += 1;
    }
    units
};

/// For each cell, the indices into [`UNITS`] of its row, column, and box.
pub const CELL_UNITS: [[usize; 3]; 81] = {
    let mut table = [[0; 3]; 81];
    let mut i = 0;
    while i < 81 {
        let cell = Cell::ALL[i];
        table[i] = [
            cell.row() as usize,
            9 + cell.col() as usize,
            18 + cell.box_index() as usize,
        ];
        i += 1;
    }
    table
};

/// For each cell, its 20 peers in ascending index order, excluding the
/// cell itself.
pub const PEERS: [[Cell; 20]; 81] = {
    let mut peers = [[Cell::new(0); 20]; 81];
    let mut i = 0;
    while i < 81 {
        let mut member = [false; 81];
        let mut u = 0;
        while u < 3 {
            let unit = UNITS[CELL_UNITS[i][u]];
            let mut j = 0;
            while j < 9 {
                member[unit[j].index()] = true;
                j += 1;
            }
            u += 1;
        }
        member[i] = false;
        let mut n = 0;
        let mut k = 0;
        #[expect(clippy::cast_possible_truncation)]
        while k < 81 {
            if member[k] {
                peers[i][n] = Cell::new(k as u8);
                n += 1;
            }
            k += 1;
        }
        assert!(n == 20);
        i += 1;
    }
    peers
};

/// Returns the three units (row, column, box) containing `cell`.
#[must_use]
#[inline]
pub fn units_of(cell: Cell) -> [&'static [Cell; 9]; 3] {
    let [row, col, boxu] = CELL_UNITS[cell.index()];
    [&UNITS[row], &UNITS[col], &UNITS[boxu]]
}

/// Returns the 20 peers of `cell`.
#[must_use]
#[inline]
pub fn peers_of(cell: Cell) -> &'static [Cell; 20] {
    &PEERS[cell.index()]
}

/// Asserts the structural invariants of the board topology.
///
/// Checks that there are 81 cells and 27 units, that every cell belongs
/// to exactly 3 units, and that every cell has exactly 20 distinct
/// peers. Intended for the command-line self-check; the tables are
/// compile-time constants, so a failure here means the geometry code
/// itself is wrong.
///
/// # Panics
///
/// Panics if any invariant does not hold.
pub fn self_check() {
    assert_eq!(Cell::ALL.len(), 81);
    assert_eq!(UNITS.len(), 27);

    for cell in Cell::ALL {
        let containing = UNITS
            .iter()
            .filter(|unit| unit.contains(&cell))
            .count();
        assert_eq!(containing, 3, "cell {cell} must belong to exactly 3 units");

        let peers = peers_of(cell);
        assert_eq!(peers.len(), 20);
        for (i, peer) in peers.iter().enumerate() {
            assert_ne!(*peer, cell, "cell {cell} must not be its own peer");
            assert!(
                !peers[..i].contains(peer),
                "peers of {cell} must be distinct"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_counts() {
        self_check();
    }

    #[test]
    fn test_unit_layout() {
        // row unit 0 is A1..A9
        assert_eq!(UNITS[0][0].to_string(), "A1");
        assert_eq!(UNITS[0][8].to_string(), "A9");
        // column unit 9 is A1..I1
        assert_eq!(UNITS[9][0].to_string(), "A1");
        assert_eq!(UNITS[9][8].to_string(), "I1");
        // box unit 18 is the top-left box
        assert_eq!(UNITS[18][0].to_string(), "A1");
        assert_eq!(UNITS[18][8].to_string(), "C3");
        // last box unit is the bottom-right box
        assert_eq!(UNITS[26][0].to_string(), "G7");
        assert_eq!(UNITS[26][8].to_string(), "I9");
    }

    #[test]
    fn test_units_of_contains_cell() {
        for cell in Cell::ALL {
            for unit in units_of(cell) {
                assert!(unit.contains(&cell));
            }
        }
    }

    #[test]
    fn test_known_peer_set() {
        // Peers of C2: its row (C1..C9), column (A2..I2), and box
        // (A1..C3), minus C2 itself and double counts.
        let c2 = Cell::from_label("C2").unwrap();
        let peers = peers_of(c2);
        let expected = [
            "A1", "A2", "A3", "B1", "B2", "B3", "C1", "C3", "C4", "C5", "C6", "C7", "C8", "C9",
            "D2", "E2", "F2", "G2", "H2", "I2",
        ];
        let labels: Vec<_> = peers.iter().map(Cell::to_string).collect();
        assert_eq!(labels, expected);
    }

    proptest! {
        #[test]
        fn prop_peer_symmetry(a in 0u8..81, b in 0u8..81) {
            let (a, b) = (Cell::new(a), Cell::new(b));
            prop_assert_eq!(
                peers_of(a).contains(&b),
                peers_of(b).contains(&a)
            );
        }

        #[test]
        fn prop_peers_share_a_unit(index in 0u8..81) {
            let cell = Cell::new(index);
            for &peer in peers_of(cell) {
                let shared = units_of(cell)
                    .into_iter()
                    .any(|unit| unit.contains(&peer));
                prop_assert!(shared);
            }
        }
    }
}
