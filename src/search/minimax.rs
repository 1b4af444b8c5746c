//! Depth-limited minimax.
//!
//! The searcher tries every empty cell, then scores the resulting position
//! with plain recursive minimax: the searcher maximizes, the other mark
//! minimizes. Node evaluation order:
//!
//! 1. a finished position scores `win_score - depth` for the searcher's win,
//!    `depth - win_score` for a loss;
//! 2. a board with no empty cell scores 0;
//! 3. a node deeper than `max_depth` scores 0;
//! 4. otherwise every empty cell is tried for the side to move.
//!
//! The root candidate that scores strictly highest wins; ties keep the lower
//! cell index.

use std::time::Instant;

use tracing::{debug, instrument};

use crate::core::{Cell, GameState};
use crate::rules::apply_move;

use super::config::SearchConfig;
use super::stats::SearchStats;
use super::tt::{position_key, TranspositionTable};

/// Minimax search context.
///
/// Owns its configuration, statistics and optional cache. The searched
/// state is only read.
#[derive(Clone, Debug)]
pub struct MinimaxSearch {
    /// Search configuration.
    config: SearchConfig,

    /// Statistics of the last search.
    stats: SearchStats,

    /// Score cache, present when enabled in the config.
    tt: Option<TranspositionTable>,

    /// Root candidates and their scores from the last search.
    scores: Vec<(Cell, i32)>,
}

impl Default for MinimaxSearch {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl MinimaxSearch {
    /// Create a new search context.
    pub fn new(config: SearchConfig) -> Self {
        let tt = config.transposition_table.then(TranspositionTable::default);
        Self {
            config,
            stats: SearchStats::default(),
            tt,
            scores: Vec::new(),
        }
    }

    /// Pick the searcher's move, or `None` when the game is over or no cell
    /// is empty.
    #[instrument(level = "debug", skip_all)]
    pub fn search(&mut self, state: &GameState) -> Option<Cell> {
        let start = Instant::now();
        self.stats.reset();
        self.scores.clear();

        if state.is_finished() {
            return None;
        }

        let searcher = self.config.searcher;
        let mut best: Option<(Cell, i32)> = None;

        for cell in state.board().empty_cells() {
            let child = apply_move(state, cell, searcher);
            let score = self.minimax(&child, 0, false);
            self.scores.push((cell, score));

            if best.map_or(true, |(_, top)| score > top) {
                best = Some((cell, score));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            %searcher,
            chosen = ?best.map(|(cell, _)| cell.index()),
            score = ?best.map(|(_, score)| score),
            nodes = self.stats.nodes,
            cache_hits = self.stats.cache_hits,
            "search finished"
        );

        best.map(|(cell, _)| cell)
    }

    fn minimax(&mut self, state: &GameState, depth: u32, maximizing: bool) -> i32 {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let searcher = self.config.searcher;
        let win_score = self.config.win_score;
        let depth_score = depth as i32;

        if let Some(winner) = state.winner() {
            self.stats.terminal_nodes += 1;
            return if winner == searcher {
                win_score - depth_score
            } else {
                depth_score - win_score
            };
        }

        if state.board().empty_cells().next().is_none() {
            self.stats.terminal_nodes += 1;
            return 0;
        }

        if depth > self.config.max_depth {
            self.stats.depth_cutoffs += 1;
            return 0;
        }

        let key = self
            .tt
            .as_ref()
            .map(|_| position_key(state, maximizing, depth));
        if let (Some(tt), Some(key)) = (self.tt.as_ref(), key) {
            if let Some(score) = tt.probe(key) {
                self.stats.cache_hits += 1;
                return score;
            }
        }

        let mover = if maximizing { searcher } else { searcher.other() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for cell in state.board().empty_cells() {
            let child = apply_move(state, cell, mover);
            let score = self.minimax(&child, depth + 1, !maximizing);
            best = if maximizing { best.max(score) } else { best.min(score) };
        }

        if let (Some(tt), Some(key)) = (self.tt.as_mut(), key) {
            tt.store(key, best);
        }

        best
    }

    /// Root candidates and their scores from the last search, ascending by
    /// cell.
    #[must_use]
    pub fn scores(&self) -> &[(Cell, i32)] {
        &self.scores
    }

    /// Get search statistics.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Drop cached scores. Only needed to bound memory between games.
    pub fn clear_cache(&mut self) {
        if let Some(tt) = self.tt.as_mut() {
            tt.clear();
        }
    }
}

/// Pick the opponent's (`O`) move with the default configuration.
///
/// Returns `None` when the game is finished or the board is full. The input
/// state is not modified.
///
/// ```
/// use sliding_ttt::core::{Cell, GameMode};
/// use sliding_ttt::rules::{initial_state, replay};
/// use sliding_ttt::search::best_move;
///
/// // O holds 0 and 1; X holds 3 and 4. O completes the top row.
/// let cells: Vec<Cell> = [0, 3, 1, 4].iter().map(|&i| Cell::new(i).unwrap()).collect();
/// let state = replay(&initial_state(GameMode::VsBot), &cells);
///
/// assert_eq!(best_move(&state), Cell::new(2));
/// ```
#[must_use]
pub fn best_move(state: &GameState) -> Option<Cell> {
    MinimaxSearch::default().search(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameMode, Mark};
    use crate::rules::{initial_state, replay};

    fn play(mode: GameMode, indices: &[usize]) -> GameState {
        let cells: Vec<Cell> = indices.iter().map(|&i| Cell::new(i).unwrap()).collect();
        replay(&initial_state(mode), &cells)
    }

    #[test]
    fn test_immediate_win_scores_ten() {
        let state = play(GameMode::VsBot, &[0, 3, 1, 4]);
        let mut search = MinimaxSearch::default();

        assert_eq!(search.search(&state), Cell::new(2));
        let (_, score) = search.scores().iter().find(|(c, _)| c.index() == 2).unwrap();
        assert_eq!(*score, 10);
    }

    #[test]
    fn test_finished_state_has_no_move() {
        let state = play(GameMode::VsBot, &[0, 3, 1, 4, 2]);
        assert!(state.is_finished());
        assert_eq!(best_move(&state), None);
    }

    #[test]
    fn test_scores_cover_every_empty_cell() {
        let state = play(GameMode::VsBot, &[4, 0]);
        let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(2));
        search.search(&state);

        let cells: Vec<usize> = search.scores().iter().map(|(c, _)| c.index()).collect();
        assert_eq!(cells, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_depth_cutoff_counted() {
        let state = play(GameMode::VsBot, &[4]);
        let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(0));
        search.search(&state);

        let stats = search.stats();
        assert!(stats.depth_cutoffs > 0);
        assert!(stats.max_depth <= 1);
    }

    #[test]
    fn test_search_for_x() {
        // X holds 0, 1 and may complete the top row.
        let state = play(GameMode::Multiplayer, &[0, 4, 1, 8]);
        let mut search = MinimaxSearch::new(SearchConfig::default().with_searcher(Mark::X));

        assert_eq!(search.search(&state), Cell::new(2));
    }

    #[test]
    fn test_transposition_table_same_result() {
        let state = play(GameMode::VsBot, &[4, 0, 8, 2]);

        let mut plain = MinimaxSearch::new(SearchConfig::default());
        let mut cached =
            MinimaxSearch::new(SearchConfig::default().with_transposition_table(true));

        assert_eq!(plain.search(&state), cached.search(&state));
        assert_eq!(plain.scores(), cached.scores());
        assert!(cached.stats().cache_hits > 0);
        assert!(cached.stats().nodes < plain.stats().nodes);
    }

    #[test]
    fn test_search_does_not_modify_state() {
        let state = play(GameMode::VsBot, &[4, 0]);
        let before = state.clone();
        let _ = best_move(&state);
        assert_eq!(state, before);
    }
}
