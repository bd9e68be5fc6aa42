//! Outcome consistency invariant: the recorded outcome matches the board.

use super::super::rules::{is_full, is_win};
use super::super::{Game, Mark, Outcome};
use super::Invariant;

/// Invariant: the outcome agrees with the board and roster.
///
/// - An undecided game has no completed line.
/// - A winner is a registered player.
/// - A draw only stands on a full board.
pub struct OutcomeConsistentInvariant;

impl Invariant<Game> for OutcomeConsistentInvariant {
    fn holds(game: &Game) -> bool {
        match game.outcome() {
            None => !is_win(game.board(), Mark::X) && !is_win(game.board(), Mark::O),
            Some(Outcome::Winner(player)) => game.has_player(player),
            Some(Outcome::Draw) => is_full(game.board()),
        }
    }

    fn description() -> &'static str {
        "Outcome agrees with the board and the roster"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerId, Position};

    #[test]
    fn test_undecided_line_violates() {
        let mut game = Game::new();
        for pos in [0, 1, 2] {
            game.board = game
                .board
                .with_mark(Position::from_index(pos).unwrap(), Mark::O);
        }
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_stranger_winner_violates() {
        let mut game = Game::new();
        game.outcome = Some(Outcome::Winner(PlayerId::new("ghost")));
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_early_draw_violates() {
        let mut game = Game::new();
        game.outcome = Some(Outcome::Draw);
        assert!(!OutcomeConsistentInvariant::holds(&game));
    }
}
