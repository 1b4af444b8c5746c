//! Error types for move validation and state decoding.
//!
//! `apply_move` never returns these: it rejects illegal moves by handing back
//! the input state. `try_apply_move` and state deserialization report them.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::mark::Mark;

/// Reason a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, Serialize, Deserialize)]
pub enum MoveError {
    /// The target cell already holds a mark.
    #[display("cell {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Cell),
    /// The game already has a winner.
    #[display("game is finished")]
    GameFinished,
}

/// Reason a decoded state was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum StateError {
    /// A cell index outside 0..=8.
    #[display("cell index {_0} is out of range")]
    CellOutOfRange(#[error(not(source))] u8),
    /// A placement window holds more than three cells.
    #[display("{mark} holds {len} cells, at most 3 allowed")]
    WindowTooLong { mark: Mark, len: usize },
    /// A placement window lists the same cell twice.
    #[display("{mark} lists cell {cell} twice")]
    DuplicateCell { mark: Mark, cell: Cell },
    /// Both windows claim the same cell.
    #[display("cell {_0} is claimed by both players")]
    WindowsOverlap(#[error(not(source))] Cell),
    /// The board and the windows disagree about a cell.
    #[display("board cell {_0} does not match the placement windows")]
    BoardMismatch(#[error(not(source))] Cell),
    /// Board text that is not nine `X`/`O`/empty symbols.
    #[display("malformed board text")]
    MalformedBoard,
    /// The recorded winner or winning line is not what the board shows.
    #[display("recorded winner does not match the board")]
    WinnerMismatch,
}
