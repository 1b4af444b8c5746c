//! Board cell identification.
//!
//! Cells are indexed 0..=8 in row-major order: `index = row * 3 + col`.
//!
//! ```text
//! 0 | 1 | 2
//! --+---+--
//! 3 | 4 | 5
//! --+---+--
//! 6 | 7 | 8
//! ```
//!
//! A `Cell` is always in range. Raw indices coming from a UI or the room
//! layer go through `Cell::new`, which refuses anything past 8.

use serde::{Deserialize, Serialize};

use super::error::StateError;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A board position, 0..=8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Cell(u8);

impl Cell {
    /// Create a cell from a raw index, `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Create a cell from row and column (both 0..=2).
    #[must_use]
    pub const fn at(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self((row * 3 + col) as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this cell (0..=2).
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / 3
    }

    /// Column of this cell (0..=2).
    #[must_use]
    pub const fn col(self) -> usize {
        self.0 as usize % 3
    }

    /// Iterate over all cells in ascending order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }

    pub(crate) const fn from_index_unchecked(index: u8) -> Self {
        Self(index)
    }
}

impl TryFrom<u8> for Cell {
    type Error = StateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Cell::new(value as usize).ok_or(StateError::CellOutOfRange(value))
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

impl From<Cell> for usize {
    fn from(cell: Cell) -> Self {
        cell.index()
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_range() {
        assert!(Cell::new(0).is_some());
        assert!(Cell::new(8).is_some());
        assert!(Cell::new(9).is_none());
        assert!(Cell::new(usize::MAX).is_none());
    }

    #[test]
    fn test_row_col() {
        let cell = Cell::at(2, 1).unwrap();
        assert_eq!(cell.index(), 7);
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 1);
        assert!(Cell::at(3, 0).is_none());
    }

    #[test]
    fn test_all_ascending() {
        let cells: Vec<usize> = Cell::all().map(Cell::index).collect();
        assert_eq!(cells, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_serde_is_plain_index() {
        let cell = Cell::new(5).unwrap();
        assert_eq!(serde_json::to_string(&cell).unwrap(), "5");
        assert_eq!(serde_json::from_str::<Cell>("5").unwrap(), cell);
        assert!(serde_json::from_str::<Cell>("9").is_err());
    }
}
