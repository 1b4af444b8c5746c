//! Opponent search.
//!
//! ## Overview
//!
//! Depth-limited minimax over the rule engine's transition function. The
//! searcher (by default `O`, the scripted opponent) maximizes; faster wins
//! and slower losses score better.
//!
//! ## Usage
//!
//! ```rust
//! use sliding_ttt::core::GameMode;
//! use sliding_ttt::rules::{apply_move, initial_state};
//! use sliding_ttt::search::{MinimaxSearch, SearchConfig};
//!
//! let state = initial_state(GameMode::VsBot);
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(2));
//!
//! if let Some(cell) = search.search(&state) {
//!     let next = apply_move(&state, cell, state.current_player());
//!     println!("{next}");
//! }
//! println!("{} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;
pub mod tt;

pub use config::SearchConfig;
pub use minimax::{best_move, MinimaxSearch};
pub use stats::SearchStats;
pub use tt::{position_key, TranspositionTable};
