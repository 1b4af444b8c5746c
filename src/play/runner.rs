//! Match runner.
//!
//! Plays a full game between two policies through the rule engine.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::core::{GameMode, Mark};
use crate::policy::MovePolicy;
use crate::rules::{initial_state, try_apply_move};

use super::record::{MatchOutcome, MatchRecord, MoveRecord};

/// Configuration for a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Game mode; decides who opens.
    pub mode: GameMode,

    /// Maximum moves before the match is called off. Sliding windows mean a
    /// game need not end on its own.
    pub max_plies: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::VsBot,
            max_plies: 200,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the ply limit.
    pub fn with_max_plies(mut self, max: usize) -> Self {
        self.max_plies = max;
        self
    }
}

/// Play one match, `x` moving for `X` and `o` for `O`.
#[instrument(level = "debug", skip_all, fields(mode = ?config.mode))]
pub fn play_match<X, O>(x: &mut X, o: &mut O, config: &MatchConfig) -> MatchRecord
where
    X: MovePolicy + ?Sized,
    O: MovePolicy + ?Sized,
{
    let mut state = initial_state(config.mode);
    let mut moves = Vector::new();

    let outcome = loop {
        if let Some(winner) = state.winner() {
            break MatchOutcome::Won(winner);
        }
        if moves.len() >= config.max_plies {
            break MatchOutcome::PlyLimit;
        }

        let mark = state.current_player();
        let choice = match mark {
            Mark::X => x.choose_move(&state, mark),
            Mark::O => o.choose_move(&state, mark),
        };
        let Some(cell) = choice else {
            break MatchOutcome::Stalled(mark);
        };

        let evicted = state.positions(mark).next_eviction();
        match try_apply_move(&state, cell, mark) {
            Ok(next) => {
                moves.push_back(MoveRecord::new(moves.len() as u32, mark, cell, evicted));
                state = next;
            }
            Err(error) => {
                warn!(%mark, %cell, %error, "policy chose an illegal move");
                break MatchOutcome::IllegalMove { mark, error };
            }
        }
    };

    debug!(plies = moves.len(), ?outcome, "match finished");

    MatchRecord {
        moves,
        final_state: state,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, GameState};
    use crate::policy::FirstFreePolicy;

    /// Replays a fixed list of cells, then gives up.
    struct Scripted(Vec<usize>);

    impl MovePolicy for Scripted {
        fn choose_move(&mut self, _state: &GameState, _mark: Mark) -> Option<Cell> {
            if self.0.is_empty() {
                None
            } else {
                Cell::new(self.0.remove(0))
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(config.mode, GameMode::VsBot);
        assert_eq!(config.max_plies, 200);
    }

    #[test]
    fn test_scripted_win() {
        let mut x = Scripted(vec![3, 4]);
        let mut o = Scripted(vec![0, 1, 2]);
        let record = play_match(&mut x, &mut o, &MatchConfig::default());

        assert_eq!(record.outcome, MatchOutcome::Won(Mark::O));
        assert_eq!(record.plies(), 5);
        assert_eq!(record.final_state.current_player(), Mark::O);
    }

    #[test]
    fn test_stalled() {
        let mut x = Scripted(vec![]);
        let mut o = Scripted(vec![4]);
        let record = play_match(&mut x, &mut o, &MatchConfig::default());

        assert_eq!(record.outcome, MatchOutcome::Stalled(Mark::X));
        assert_eq!(record.plies(), 1);
    }

    #[test]
    fn test_illegal_move_ends_match() {
        let mut x = Scripted(vec![4]);
        let mut o = Scripted(vec![4, 0]);
        let record = play_match(&mut x, &mut o, &MatchConfig::default());

        assert!(matches!(
            record.outcome,
            MatchOutcome::IllegalMove { mark: Mark::X, .. }
        ));
        assert_eq!(record.plies(), 1);
    }

    #[test]
    fn test_ply_limit() {
        let config = MatchConfig::new().with_max_plies(4);
        let record = play_match(&mut FirstFreePolicy, &mut FirstFreePolicy, &config);

        assert_eq!(record.outcome, MatchOutcome::PlyLimit);
        assert_eq!(record.plies(), 4);
    }

    #[test]
    fn test_records_evictions() {
        let config = MatchConfig::new().with_mode(GameMode::Multiplayer);
        // X: 0 1 5 3 (0 evicted on the 4th), O: 8 7 4.
        let mut x = Scripted(vec![0, 1, 5, 3]);
        let mut o = Scripted(vec![8, 7, 4]);
        let record = play_match(&mut x, &mut o, &config);

        let last = record.moves.last().unwrap();
        assert_eq!(last.cell, Cell::new(3).unwrap());
        assert_eq!(last.evicted, Cell::new(0));
        assert_eq!(record.outcome, MatchOutcome::Stalled(Mark::O));
    }
}
