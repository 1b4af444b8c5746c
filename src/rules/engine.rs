//! The state transition function.
//!
//! - `initial_state`: fresh game for a mode
//! - `apply_move`: total transition, illegal moves return the input unchanged
//! - `try_apply_move`: same rules, reporting why a move was refused

use tracing::{debug, trace};

use crate::core::{Cell, GameMode, GameState, Mark, MoveError};

/// Create the starting state for a game mode.
///
/// ```
/// use sliding_ttt::core::{GameMode, Mark};
/// use sliding_ttt::rules::initial_state;
///
/// let state = initial_state(GameMode::VsBot);
/// assert_eq!(state.current_player(), Mark::O);
/// ```
#[must_use]
pub fn initial_state(mode: GameMode) -> GameState {
    GameState::new(mode)
}

/// Check whether `mark` may be placed at `cell`.
///
/// The mark does not have to be the current player's; turn order is the
/// caller's concern.
pub fn check_move(state: &GameState, cell: Cell) -> Result<(), MoveError> {
    if state.is_finished() {
        return Err(MoveError::GameFinished);
    }
    if !state.board().is_empty(cell) {
        return Err(MoveError::CellOccupied(cell));
    }
    Ok(())
}

/// Place `mark` at `cell` and return the successor state.
///
/// In order: the cell joins the mover's window, a fourth entry evicts the
/// oldest one and clears it, the mark is written, and the board is checked
/// for a win. On a win the state is finished and `current_player` stays on
/// the mover; otherwise the turn passes.
///
/// An occupied cell or a finished game returns a clone of `state`.
#[must_use]
pub fn apply_move(state: &GameState, cell: Cell, mark: Mark) -> GameState {
    match try_apply_move(state, cell, mark) {
        Ok(next) => next,
        Err(err) => {
            debug!(%cell, %mark, %err, "move rejected");
            state.clone()
        }
    }
}

/// Like `apply_move`, but refuses illegal moves with an error.
pub fn try_apply_move(state: &GameState, cell: Cell, mark: Mark) -> Result<GameState, MoveError> {
    check_move(state, cell)?;

    let mut next = state.clone();
    let evicted = next.place(cell, mark);
    next.settle(mark);

    trace!(%cell, %mark, ?evicted, winner = ?next.winner(), "move applied");
    Ok(next)
}

/// Apply a sequence of moves, alternating from the current player.
///
/// Rejected moves are skipped without passing the turn.
#[must_use]
pub fn replay(state: &GameState, cells: &[Cell]) -> GameState {
    cells.iter().fold(state.clone(), |acc, &cell| {
        let mark = acc.current_player();
        apply_move(&acc, cell, mark)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameStatus;

    fn cell(i: usize) -> Cell {
        Cell::new(i).unwrap()
    }

    fn cells(indices: &[usize]) -> Vec<Cell> {
        indices.iter().map(|&i| cell(i)).collect()
    }

    #[test]
    fn test_first_move_vs_bot() {
        let state = initial_state(GameMode::VsBot);
        let next = apply_move(&state, cell(4), Mark::O);

        assert_eq!(next.board().get(cell(4)), Some(Mark::O));
        assert_eq!(next.board().occupied_count(), 1);
        assert_eq!(next.positions(Mark::O).as_slice(), &[cell(4)]);
        assert!(next.positions(Mark::X).is_empty());
        assert_eq!(next.current_player(), Mark::X);
        assert_eq!(next.status(), GameStatus::InProgress);

        // Input untouched.
        assert_eq!(state, initial_state(GameMode::VsBot));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let state = apply_move(&initial_state(GameMode::Multiplayer), cell(0), Mark::X);

        assert_eq!(apply_move(&state, cell(0), Mark::O), state);
        assert_eq!(
            try_apply_move(&state, cell(0), Mark::O),
            Err(MoveError::CellOccupied(cell(0)))
        );
    }

    #[test]
    fn test_finished_game_rejected() {
        // X: 0 1 2 with O elsewhere.
        let state = replay(&initial_state(GameMode::Multiplayer), &cells(&[0, 3, 1, 4, 2]));
        assert!(state.is_finished());

        assert_eq!(apply_move(&state, cell(8), Mark::O), state);
        assert_eq!(try_apply_move(&state, cell(8), Mark::O), Err(MoveError::GameFinished));
    }

    #[test]
    fn test_win_keeps_current_player() {
        let state = replay(&initial_state(GameMode::Multiplayer), &cells(&[0, 3, 1, 4, 2]));

        assert_eq!(state.winner(), Some(Mark::X));
        assert_eq!(state.current_player(), Mark::X);
        assert_eq!(state.winning_line().unwrap().cells(), [cell(0), cell(1), cell(2)]);
    }

    #[test]
    fn test_fourth_mark_evicts_oldest() {
        // X plays 0, 1, 5, 3 while O plays 8, 7, 4 (no line for either).
        let state = replay(
            &initial_state(GameMode::Multiplayer),
            &cells(&[0, 8, 1, 7, 5, 4]),
        );
        assert_eq!(state.positions(Mark::X).as_slice(), cells(&[0, 1, 5]).as_slice());

        let next = apply_move(&state, cell(3), Mark::X);
        assert_eq!(next.positions(Mark::X).as_slice(), cells(&[1, 5, 3]).as_slice());
        assert!(next.board().is_empty(cell(0)));
        assert_eq!(next.board().get(cell(3)), Some(Mark::X));
        assert_eq!(next.winner(), None);
    }

    #[test]
    fn test_eviction_can_break_a_line() {
        // O holds 0, 1, 6 (0 oldest). Playing 2 evicts 0, so no top row.
        let state = replay(
            &initial_state(GameMode::VsBot),
            &cells(&[0, 4, 1, 5, 6, 8]),
        );
        assert_eq!(state.positions(Mark::O).as_slice(), cells(&[0, 1, 6]).as_slice());

        let next = apply_move(&state, cell(2), Mark::O);
        assert_eq!(next.winner(), None);
        assert!(next.board().is_empty(cell(0)));
    }

    #[test]
    fn test_replay_skips_rejected() {
        let state = replay(&initial_state(GameMode::Multiplayer), &cells(&[4, 4, 0]));

        assert_eq!(state.positions(Mark::X).as_slice(), &[cell(4)]);
        assert_eq!(state.positions(Mark::O).as_slice(), &[cell(0)]);
    }
}
