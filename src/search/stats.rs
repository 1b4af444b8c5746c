//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `MinimaxSearch::search` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes evaluated (root candidates included).
    pub nodes: u64,

    /// Nodes scored by a win or a full board.
    pub terminal_nodes: u64,

    /// Nodes scored 0 by the depth cutoff.
    pub depth_cutoffs: u64,

    /// Nodes answered from the transposition table.
    pub cache_hits: u64,

    /// Deepest ply evaluated.
    pub max_depth: u32,

    /// Wall time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes evaluated per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Fraction of nodes served from the cache.
    #[must_use]
    pub fn cache_hit_rate(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            self.cache_hits as f64 / self.nodes as f64
        }
    }
}
