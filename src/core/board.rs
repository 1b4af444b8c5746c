//! The 3x3 board and its eight winning lines.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, CELL_COUNT};
use super::error::StateError;
use super::mark::Mark;

/// A winning line: three cells, in scan order.
///
/// Serializes as a plain three-element index array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line(pub [Cell; 3]);

impl Line {
    const fn from_indices(a: u8, b: u8, c: u8) -> Self {
        Self([
            Cell::from_index_unchecked(a),
            Cell::from_index_unchecked(b),
            Cell::from_index_unchecked(c),
        ])
    }

    /// The cells of this line.
    #[must_use]
    pub const fn cells(&self) -> [Cell; 3] {
        self.0
    }

    /// Check whether the line passes through a cell.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.0.contains(&cell)
    }
}

/// All lines in scan order: rows top to bottom, columns left to right,
/// then the 0-4-8 and 2-4-6 diagonals.
pub const LINES: [Line; 8] = [
    Line::from_indices(0, 1, 2),
    Line::from_indices(3, 4, 5),
    Line::from_indices(6, 7, 8),
    Line::from_indices(0, 3, 6),
    Line::from_indices(1, 4, 7),
    Line::from_indices(2, 5, 8),
    Line::from_indices(0, 4, 8),
    Line::from_indices(2, 4, 6),
];

/// Nine cells in row-major order; `None` is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board([Option<Mark>; CELL_COUNT]);

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self([None; CELL_COUNT])
    }

    /// Build a board from raw cell values.
    #[must_use]
    pub const fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self(cells)
    }

    /// Get the mark at a cell.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.0[cell.index()]
    }

    pub(crate) fn set(&mut self, cell: Cell, mark: Option<Mark>) {
        self.0[cell.index()] = mark;
    }

    /// Check if a cell is empty.
    #[must_use]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Iterate over empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.is_empty(cell))
    }

    /// Iterate over (Cell, Option<Mark>) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Option<Mark>)> + '_ {
        Cell::all().map(move |cell| (cell, self.get(cell)))
    }

    /// Count the marks on the board.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    /// Raw cell values.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.0[index] {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, "{}", index + 1)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = StateError;

    /// Parse nine symbols (`X`, `O`, or `.`/`_`/`-` for empty), ignoring
    /// whitespace and `|`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0usize;

        for ch in s.chars().filter(|c| !c.is_whitespace() && *c != '|') {
            let value = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '_' | '-' => None,
                _ => return Err(StateError::MalformedBoard),
            };
            if count >= CELL_COUNT {
                return Err(StateError::MalformedBoard);
            }
            cells[count] = value;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(StateError::MalformedBoard);
        }
        Ok(Self(cells))
    }
}
