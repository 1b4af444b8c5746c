//! Move policies.
//!
//! A `MovePolicy` picks a cell for a mark. Policies drive both sides of a
//! match in `play`:
//! - `MinimaxPolicy`: the scripted opponent, backed by `MinimaxSearch`
//! - `RandomPolicy`: uniform over legal cells, seeded
//! - `FirstFreePolicy`: lowest legal cell, for reproducible fixtures

use crate::core::{Cell, GameRng, GameState, Mark};
use crate::search::{MinimaxSearch, SearchConfig};

/// Chooses moves for one side of a game.
pub trait MovePolicy {
    /// Choose a cell for `mark`.
    ///
    /// Returns `None` if no legal move exists.
    fn choose_move(&mut self, state: &GameState, mark: Mark) -> Option<Cell>;
}

/// Minimax-backed policy.
///
/// Searches with `mark` as the maximizer, whatever the config's searcher.
#[derive(Clone, Debug, Default)]
pub struct MinimaxPolicy {
    config: SearchConfig,
    search: Option<MinimaxSearch>,
}

impl MinimaxPolicy {
    /// Create a policy with a search configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            search: None,
        }
    }

    /// The search context used for the most recent move.
    #[must_use]
    pub fn last_search(&self) -> Option<&MinimaxSearch> {
        self.search.as_ref()
    }
}

impl MovePolicy for MinimaxPolicy {
    fn choose_move(&mut self, state: &GameState, mark: Mark) -> Option<Cell> {
        // Reuse the context (and its cache) while the mark stays the same.
        let reusable = self
            .search
            .as_ref()
            .is_some_and(|s| s.config().searcher == mark);
        if !reusable {
            let config = self.config.clone().with_searcher(mark);
            self.search = Some(MinimaxSearch::new(config));
        }
        self.search.as_mut().and_then(|search| search.search(state))
    }
}

/// Uniform random policy over legal cells.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    /// Create a policy with its own seeded stream.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a policy drawing from an existing stream.
    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MovePolicy for RandomPolicy {
    fn choose_move(&mut self, state: &GameState, _mark: Mark) -> Option<Cell> {
        let moves: Vec<Cell> = state.legal_moves().collect();
        self.rng.choose(&moves).copied()
    }
}

/// Always plays the lowest legal cell.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstFreePolicy;

impl MovePolicy for FirstFreePolicy {
    fn choose_move(&mut self, state: &GameState, _mark: Mark) -> Option<Cell> {
        state.legal_moves().next()
    }
}
