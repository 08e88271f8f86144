//! South Indian chart layout.
//!
//! A 4×4 grid whose 12 border cells hold the 12 rashis at fixed positions,
//! Pisces in the top-left corner and the signs running clockwise. The four
//! interior cells form one merged center block for chart metadata. Sign
//! positions never move with the ascendant; only the house number drawn in
//! each cell changes.

use serde::Serialize;

use crate::rashi::{ALL_RASHIS, Rashi};

/// Number of rows and columns in the grid.
pub const GRID_SIZE: u8 = 4;

/// A cell position, 0-based row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridCell {
    pub row: u8,
    pub col: u8,
}

impl GridCell {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// One sign slot of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutCell {
    pub cell: GridCell,
    pub sign_index: u8,
}

const fn slot(row: u8, col: u8, sign_index: u8) -> LayoutCell {
    LayoutCell {
        cell: GridCell::new(row, col),
        sign_index,
    }
}

/// Sign-to-cell assignment, in row-major cell order.
pub const SOUTH_INDIAN_LAYOUT: [LayoutCell; 12] = [
    slot(0, 0, 11),
    slot(0, 1, 0),
    slot(0, 2, 1),
    slot(0, 3, 2),
    slot(1, 0, 10),
    slot(1, 3, 3),
    slot(2, 0, 9),
    slot(2, 3, 4),
    slot(3, 0, 8),
    slot(3, 1, 7),
    slot(3, 2, 6),
    slot(3, 3, 5),
];

/// The interior cells merged into the center block.
pub const CENTER_CELLS: [GridCell; 4] = [
    GridCell::new(1, 1),
    GridCell::new(1, 2),
    GridCell::new(2, 1),
    GridCell::new(2, 2),
];

/// What occupies a grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutSlot {
    Sign(Rashi),
    Center,
}

/// Grid cell holding a sign.
pub fn cell_of_sign(sign_index: u8) -> GridCell {
    debug_assert!(sign_index < 12, "sign index out of range: {sign_index}");
    let idx = SOUTH_INDIAN_LAYOUT
        .iter()
        .position(|c| c.sign_index == sign_index)
        .unwrap_or(0);
    SOUTH_INDIAN_LAYOUT[idx].cell
}

/// Content of a grid position, `None` outside the 4×4 grid.
pub fn slot_at(row: u8, col: u8) -> Option<LayoutSlot> {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return None;
    }
    let cell = GridCell::new(row, col);
    if CENTER_CELLS.contains(&cell) {
        return Some(LayoutSlot::Center);
    }
    SOUTH_INDIAN_LAYOUT
        .iter()
        .find(|c| c.cell == cell)
        .map(|c| LayoutSlot::Sign(ALL_RASHIS[c.sign_index as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_each_sign_once() {
        let mut seen = [false; 12];
        for c in SOUTH_INDIAN_LAYOUT {
            assert!(!seen[c.sign_index as usize], "duplicate sign {}", c.sign_index);
            seen[c.sign_index as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn pisces_top_left_virgo_bottom_right() {
        assert_eq!(slot_at(0, 0), Some(LayoutSlot::Sign(Rashi::Meena)));
        assert_eq!(slot_at(3, 3), Some(LayoutSlot::Sign(Rashi::Kanya)));
        assert_eq!(cell_of_sign(0), GridCell::new(0, 1));
        assert_eq!(cell_of_sign(6), GridCell::new(3, 2));
    }

    #[test]
    fn center_is_reserved() {
        for c in CENTER_CELLS {
            assert_eq!(slot_at(c.row, c.col), Some(LayoutSlot::Center));
            assert!(SOUTH_INDIAN_LAYOUT.iter().all(|l| l.cell != c));
        }
    }

    #[test]
    fn outside_grid() {
        assert_eq!(slot_at(4, 0), None);
        assert_eq!(slot_at(0, 4), None);
    }

    #[test]
    fn round_trip_through_cells() {
        for s in 0..12u8 {
            let cell = cell_of_sign(s);
            assert_eq!(
                slot_at(cell.row, cell.col),
                Some(LayoutSlot::Sign(ALL_RASHIS[s as usize]))
            );
        }
    }
}
