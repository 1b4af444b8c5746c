//! Match records.
//!
//! A record keeps every move of a match plus the final state, so a match
//! can be replayed, inspected in tests, or handed to the room layer.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Cell, GameState, Mark, MoveError};

/// One applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Ply number, starting at 0.
    pub ply: u32,

    /// Mark that moved.
    pub mark: Mark,

    /// Cell played.
    pub cell: Cell,

    /// Cell vacated by the sliding window, if any.
    pub evicted: Option<Cell>,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(ply: u32, mark: Mark, cell: Cell, evicted: Option<Cell>) -> Self {
        Self {
            ply,
            mark,
            cell,
            evicted,
        }
    }
}

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// A mark completed a line.
    Won(Mark),
    /// The side to move had no move to offer.
    Stalled(Mark),
    /// A policy chose a cell the rules refused.
    IllegalMove { mark: Mark, error: MoveError },
    /// The ply limit was reached first.
    PlyLimit,
}

impl MatchOutcome {
    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        match self {
            MatchOutcome::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// A complete match.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Moves in play order.
    pub moves: Vector<MoveRecord>,

    /// State after the last move.
    pub final_state: GameState,

    /// How the match ended.
    pub outcome: MatchOutcome,
}

impl MatchRecord {
    /// Number of moves played.
    #[must_use]
    pub fn plies(&self) -> usize {
        self.moves.len()
    }

    /// The winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.outcome.winner()
    }

    /// Cells played by one mark, in order.
    pub fn cells_for(&self, mark: Mark) -> impl Iterator<Item = Cell> + '_ {
        self.moves
            .iter()
            .filter(move |m| m.mark == mark)
            .map(|m| m.cell)
    }
}
