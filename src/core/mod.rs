//! Core game types: marks, cells, board, placement windows, state, RNG.
//!
//! Everything here is a plain value. The rule engine in `rules` is the only
//! code that moves a `GameState` from one position to the next.

pub mod board;
pub mod cell;
pub mod error;
pub mod mark;
pub mod rng;
pub mod state;
pub mod window;

pub use board::{Board, Line, LINES};
pub use cell::{Cell, CELL_COUNT};
pub use error::{MoveError, StateError};
pub use mark::{Mark, MarkMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameMode, GameState, GameStatus};
pub use window::{PlacementWindow, WINDOW_SIZE};
