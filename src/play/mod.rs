//! Playing whole games.
//!
//! - `runner`: drives two `MovePolicy`s through a match
//! - `record`: what a finished match looks like
//! - `stats`: per-player win/loss and time tally

pub mod record;
pub mod runner;
pub mod stats;

pub use record::{MatchOutcome, MatchRecord, MoveRecord};
pub use runner::{play_match, MatchConfig};
pub use stats::{format_duration, PlayerStats};
