//! Per-player placement window.
//!
//! Each player occupies at most `WINDOW_SIZE` cells. The window records them
//! oldest first; pushing a fourth cell evicts the oldest one (FIFO by
//! placement order).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Cell;

/// Maximum number of marks a player keeps on the board.
pub const WINDOW_SIZE: usize = 3;

/// Cells a player currently occupies, oldest placement first.
///
/// SmallVec keeps the window inline, including the transient fourth entry
/// that exists between push and eviction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlacementWindow {
    cells: SmallVec<[Cell; WINDOW_SIZE + 1]>,
}

impl PlacementWindow {
    /// Create an empty window.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a window from cells listed oldest first. No bound checks; use
    /// `GameState` validation for untrusted input.
    #[must_use]
    pub fn from_cells(cells: &[Cell]) -> Self {
        Self {
            cells: SmallVec::from_slice(cells),
        }
    }

    /// Record a placement, evicting the oldest cell if the window overflows.
    ///
    /// Returns the evicted cell.
    pub fn push(&mut self, cell: Cell) -> Option<Cell> {
        self.cells.push(cell);
        if self.cells.len() > WINDOW_SIZE {
            Some(self.cells.remove(0))
        } else {
            None
        }
    }

    /// The cell that would be evicted by the next placement, if any.
    #[must_use]
    pub fn next_eviction(&self) -> Option<Cell> {
        if self.cells.len() >= WINDOW_SIZE {
            self.cells.first().copied()
        } else {
            None
        }
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the player has no marks on the board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if the window holds a cell.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Cells, oldest first.
    #[must_use]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over cells, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().copied()
    }
}
