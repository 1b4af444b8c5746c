//! Rule engine for sliding-window tic-tac-toe.
//!
//! Each player keeps at most three marks on the board. Placing a fourth
//! removes that player's oldest mark first. Three in a row wins and freezes
//! the game.
//!
//! All functions here are pure: they take a state by reference and return a
//! new one.

pub mod engine;
pub mod win;

pub use engine::{apply_move, check_move, initial_state, replay, try_apply_move};
pub use win::{detect_winner, Win};
