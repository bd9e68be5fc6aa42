//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Kept apart from the game record so
//! contracts and invariants can reuse them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{is_win, lines};

use super::{Board, Mark, Outcome, PlayerId};
use tracing::{debug, instrument};

/// Decides the game after `mark` has just been played by `current_player`.
///
/// A win takes precedence over a full board, so a move that both fills
/// the board and completes a line is a win.
#[instrument(skip_all, fields(player = %current_player, mark = %mark))]
pub fn evaluate_outcome(board: &Board, current_player: &PlayerId, mark: Mark) -> Option<Outcome> {
    if is_win(board, mark) {
        debug!("Line completed");
        Some(Outcome::Winner(current_player.clone()))
    } else if is_full(board) {
        debug!("Board full without a line");
        Some(Outcome::Draw)
    } else {
        None
    }
}
