//! # sliding-ttt
//!
//! Tic-tac-toe where each player keeps at most three marks on the board,
//! plus a minimax opponent.
//!
//! ## Rules
//!
//! 1. **Sliding window**: placing a fourth mark first removes that player's
//!    oldest one. The freed cell is playable again at once.
//!
//! 2. **Three in a row wins**: rows, columns and both diagonals. The game
//!    freezes on a win; there are no draws.
//!
//! 3. **Opening**: against the bot `O` moves first, in multiplayer `X` does.
//!
//! ## Architecture
//!
//! - **Pure transitions**: `rules::apply_move` takes a state by reference
//!   and returns a new one. Rejected moves hand back the input unchanged.
//!
//! - **Wire shape**: `GameState` serializes to the camelCase JSON clients
//!   exchange, and refuses inconsistent documents on the way in.
//!
//! ## Modules
//!
//! - `core`: marks, cells, board, placement windows, game state, RNG
//! - `rules`: move validation, sliding placement, win detection
//! - `search`: depth-limited minimax with optional transposition table
//! - `policy`: move choosers for either side
//! - `play`: match runner, match records, player statistics

pub mod core;
pub mod play;
pub mod policy;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, GameMode, GameRng, GameState, GameStatus, Line, Mark, MarkMap, MoveError,
    PlacementWindow, StateError, LINES, WINDOW_SIZE,
};

pub use crate::rules::{apply_move, check_move, detect_winner, initial_state, try_apply_move, Win};

pub use crate::search::{best_move, MinimaxSearch, SearchConfig, SearchStats};

pub use crate::policy::{FirstFreePolicy, MinimaxPolicy, MovePolicy, RandomPolicy};

pub use crate::play::{play_match, MatchConfig, MatchOutcome, MatchRecord, PlayerStats};
