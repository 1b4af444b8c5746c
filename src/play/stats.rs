//! Per-player win/loss and time tally.
//!
//! Times are passed in by the caller as Unix milliseconds, so the tally
//! stays free of clock access and is easy to test.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Lifetime statistics for one player.
///
/// Serializes with the camelCase field names clients already store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    /// Finished games.
    pub games_played: u32,

    /// Games won.
    pub wins: u32,

    /// Games not won.
    pub losses: u32,

    /// Seconds spent across all finished games.
    pub total_time_played_seconds: u64,

    /// Shortest winning game in seconds.
    pub fastest_win_seconds: Option<u64>,

    /// Start of the game in progress, Unix milliseconds.
    pub current_game_start_time: u64,
}

impl PlayerStats {
    /// Create an empty tally with a game starting at `now_ms`.
    #[must_use]
    pub fn new(now_ms: u64) -> Self {
        Self {
            current_game_start_time: now_ms,
            ..Self::default()
        }
    }

    /// Mark the start of a new game.
    pub fn start_game(&mut self, now_ms: u64) {
        self.current_game_start_time = now_ms;
    }

    /// Record the end of the current game and return its length in seconds.
    pub fn end_game(&mut self, won: bool, now_ms: u64) -> u64 {
        let seconds = now_ms.saturating_sub(self.current_game_start_time) / 1000;

        self.games_played += 1;
        self.total_time_played_seconds += seconds;

        if won {
            self.wins += 1;
            self.fastest_win_seconds = Some(
                self.fastest_win_seconds
                    .map_or(seconds, |fastest| fastest.min(seconds)),
            );
        } else {
            self.losses += 1;
        }

        debug!(won, seconds, games = self.games_played, "game recorded");
        seconds
    }

    /// Fraction of games won, 0 before the first game.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.wins as f64 / self.games_played as f64
        }
    }
}

/// Format seconds as `"1h 2m 3s"`, `"2m 3s"` or `"3s"`.
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {secs}s")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    }
}
