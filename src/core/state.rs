//! Game state: board, turn, outcome and both placement windows.
//!
//! ## GameState
//!
//! A plain value. Transitions in `rules` clone it and return the successor;
//! nothing mutates a state a caller still holds. Fields are private so the
//! board/window invariants can only change through the rule engine.
//!
//! ## Wire shape
//!
//! The room layer stores states as JSON:
//!
//! ```json
//! {
//!   "board": [null, "X", null, null, "O", null, null, null, null],
//!   "currentPlayer": "X",
//!   "winner": null,
//!   "winningLine": [],
//!   "playerPositions": { "X": [1], "O": [4] },
//!   "gameStatus": "playing",
//!   "gameMode": "bot"
//! }
//! ```
//!
//! Deserialization checks the invariants and refuses inconsistent input
//! with a `StateError`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::{Board, Line};
use super::cell::Cell;
use super::error::StateError;
use super::mark::{Mark, MarkMap};
use super::window::{PlacementWindow, WINDOW_SIZE};
use crate::rules::detect_winner;

/// Whether moves are still accepted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted. The room layer's `"waiting"` reads as this too.
    #[serde(rename = "playing", alias = "waiting")]
    InProgress,
    /// A line was completed; the state is frozen.
    #[serde(rename = "finished")]
    Finished,
}

/// Who plays the second mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// The scripted opponent plays `O` and moves first.
    #[serde(rename = "bot")]
    VsBot,
    /// Two humans sharing a room; `X` moves first.
    #[serde(rename = "multiplayer")]
    Multiplayer,
}

impl GameMode {
    /// Mark that opens a game in this mode.
    #[must_use]
    pub const fn first_mover(self) -> Mark {
        match self {
            GameMode::VsBot => Mark::O,
            GameMode::Multiplayer => Mark::X,
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GameStateRepr", into = "GameStateRepr")]
pub struct GameState {
    board: Board,
    current_player: Mark,
    winner: Option<Mark>,
    winning_line: Option<Line>,
    positions: MarkMap<PlacementWindow>,
    status: GameStatus,
    mode: GameMode,
}

impl GameState {
    /// Create a fresh game: empty board, empty windows, in progress.
    #[must_use]
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: mode.first_mover(),
            winner: None,
            winning_line: None,
            positions: MarkMap::default(),
            status: GameStatus::InProgress,
            mode,
        }
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark to move. After a win this stays on the winner.
    #[must_use]
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Winning mark, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Completed line, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Placement window of one mark, oldest cell first.
    #[must_use]
    pub fn positions(&self, mark: Mark) -> &PlacementWindow {
        &self.positions[mark]
    }

    /// Both placement windows.
    #[must_use]
    pub fn player_positions(&self) -> &MarkMap<PlacementWindow> {
        &self.positions
    }

    /// Game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Game mode.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Check if the game has a winner.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    /// Cells a move may target: every empty cell while in progress, none once
    /// finished.
    pub fn legal_moves(&self) -> impl Iterator<Item = Cell> + '_ {
        let open = !self.is_finished();
        self.board.empty_cells().filter(move |_| open)
    }

    // === Rule engine hooks ===

    /// Place a mark, applying the window eviction. Returns the evicted cell.
    pub(crate) fn place(&mut self, cell: Cell, mark: Mark) -> Option<Cell> {
        let evicted = self.positions[mark].push(cell);
        if let Some(old) = evicted {
            self.board.set(old, None);
        }
        self.board.set(cell, Some(mark));
        evicted
    }

    /// Record the result of a move by `mover`.
    pub(crate) fn settle(&mut self, mover: Mark) {
        match detect_winner(&self.board) {
            Some(win) => {
                self.winner = Some(win.mark);
                self.winning_line = Some(win.line);
                self.current_player = mover;
                self.status = GameStatus::Finished;
            }
            None => {
                self.winner = None;
                self.winning_line = None;
                self.current_player = mover.other();
                self.status = GameStatus::InProgress;
            }
        }
    }

    /// Check every structural invariant.
    pub fn validate(&self) -> Result<(), StateError> {
        for (mark, window) in self.positions.iter() {
            if window.len() > WINDOW_SIZE {
                return Err(StateError::WindowTooLong {
                    mark,
                    len: window.len(),
                });
            }
            for (i, cell) in window.iter().enumerate() {
                if window.as_slice()[..i].contains(&cell) {
                    return Err(StateError::DuplicateCell { mark, cell });
                }
            }
        }

        if let Some(cell) = self.positions[Mark::X]
            .iter()
            .find(|&c| self.positions[Mark::O].contains(c))
        {
            return Err(StateError::WindowsOverlap(cell));
        }

        for (cell, value) in self.board.iter() {
            let owner = Mark::ALL
                .into_iter()
                .find(|&m| self.positions[m].contains(cell));
            if owner != value {
                return Err(StateError::BoardMismatch(cell));
            }
        }

        let expected = detect_winner(&self.board);
        let consistent = expected.map(|w| w.mark) == self.winner
            && expected.map(|w| w.line) == self.winning_line
            && (self.winner.is_some()) == (self.status == GameStatus::Finished);
        if !consistent {
            return Err(StateError::WinnerMismatch);
        }

        Ok(())
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.board)?;
        match self.winner {
            Some(mark) => write!(f, "{mark} wins"),
            None => write!(f, "{} to move", self.current_player),
        }
    }
}

/// Serialized form, matching the room layer's JSON.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GameStateRepr {
    board: Board,
    current_player: Mark,
    winner: Option<Mark>,
    #[serde(default)]
    winning_line: SmallVec<[Cell; 3]>,
    player_positions: MarkMap<PlacementWindow>,
    game_status: GameStatus,
    game_mode: GameMode,
}

impl From<GameState> for GameStateRepr {
    fn from(state: GameState) -> Self {
        Self {
            board: state.board,
            current_player: state.current_player,
            winner: state.winner,
            winning_line: state
                .winning_line
                .map(|line| SmallVec::from_slice(&line.cells()))
                .unwrap_or_default(),
            player_positions: state.positions,
            game_status: state.status,
            game_mode: state.mode,
        }
    }
}

impl TryFrom<GameStateRepr> for GameState {
    type Error = StateError;

    fn try_from(repr: GameStateRepr) -> Result<Self, Self::Error> {
        let winning_line = match repr.winning_line.as_slice() {
            [] => None,
            &[a, b, c] => Some(Line([a, b, c])),
            _ => return Err(StateError::WinnerMismatch),
        };

        let state = GameState {
            board: repr.board,
            current_player: repr.current_player,
            winner: repr.winner,
            winning_line,
            positions: repr.player_positions,
            status: repr.game_status,
            mode: repr.game_mode,
        };
        state.validate()?;
        Ok(state)
    }
}
