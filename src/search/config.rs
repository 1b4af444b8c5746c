//! Minimax configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::Mark;

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Deepest ply that still recurses. Nodes below it score 0.
    /// The position right after the root move is depth 0.
    pub max_depth: u32,

    /// Score of a win found at depth 0. A win at depth `d` scores
    /// `win_score - d`, a loss `d - win_score`.
    pub win_score: i32,

    /// Mark the search plays for (the maximizer).
    pub searcher: Mark,

    /// Cache node scores by position. Never changes the result.
    pub transposition_table: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 6,
            win_score: 10,
            searcher: Mark::O,
            transposition_table: false,
        }
    }
}

impl SearchConfig {
    /// Set the depth cutoff.
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set the mark to search for.
    pub fn with_searcher(mut self, mark: Mark) -> Self {
        self.searcher = mark;
        self
    }

    /// Enable or disable the transposition table.
    pub fn with_transposition_table(mut self, enabled: bool) -> Self {
        self.transposition_table = enabled;
        self
    }

    /// Set the base win score.
    pub fn with_win_score(mut self, score: i32) -> Self {
        self.win_score = score;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.win_score, 10);
        assert_eq!(config.searcher, Mark::O);
        assert!(!config.transposition_table);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_max_depth(3)
            .with_searcher(Mark::X)
            .with_transposition_table(true);

        assert_eq!(config.max_depth, 3);
        assert_eq!(config.searcher, Mark::X);
        assert!(config.transposition_table);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_max_depth(4);
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
