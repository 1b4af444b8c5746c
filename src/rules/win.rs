//! Win detection.

use tracing::instrument;

use crate::core::{Board, Line, Mark, LINES};

/// A completed line and the mark that holds it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Win {
    /// Winning mark.
    pub mark: Mark,
    /// The completed line.
    pub line: Line,
}

/// Find the first line held entirely by one mark.
///
/// Lines are scanned rows, then columns, then diagonals (see `LINES`). With
/// at most three marks per player only one line can be complete at a time,
/// so the order only fixes which triple is reported.
#[instrument(level = "trace", skip_all)]
pub fn detect_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line.cells();
        let mark = board.get(a)?;
        (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(Win { mark, line })
    })
}
