//! Placing marks.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::evaluate_outcome;
use super::{Game, PlayerId, Position, Session};
use tracing::{debug, instrument, warn};

impl Game {
    /// Plays the on-turn mark at `position` for `session`.
    ///
    /// Slot 0 plays `x` and slot 1 plays `o`. The returned game has the
    /// mark on a new board, the outcome decided for the player on turn, and
    /// the turn passed to the other slot whether or not the game ended.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition: `GameOver`,
    /// `WaitingForOpponent`, `NotAPlayer`, `NotYourTurn` or
    /// `SquareOccupied`. Postconditions are verified in debug builds.
    #[instrument(skip(self), fields(turn = ?self.turn))]
    pub fn apply_move(&self, session: &Session, position: Position) -> Result<Game, MoveError> {
        let action = Move::new(session.clone(), position);
        MoveContract::pre(self, &action).inspect_err(|e| warn!(error = %e, "Move rejected"))?;

        let mark = self.turn.mark();
        let current_player = self
            .player_on_turn()
            .cloned()
            .ok_or(MoveError::WaitingForOpponent)?;

        let mut next = self.clone();
        next.board = self.board.with_mark(position, mark);
        next.outcome = evaluate_outcome(&next.board, &current_player, mark);
        next.turn = self.turn.other();

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        debug!(%mark, outcome = ?next.outcome, "Move applied");
        Ok(next)
    }

    /// Replays a sequence of `(player, position)` moves from `self`.
    ///
    /// Stops at the first rejected move.
    #[instrument(skip(self, moves))]
    pub fn replay<'a, I>(&self, moves: I) -> Result<Game, MoveError>
    where
        I: IntoIterator<Item = (&'a PlayerId, Position)>,
    {
        moves.into_iter().try_fold(self.clone(), |game, (player, position)| {
            game.apply_move(&Session::player_session(player.clone()), position)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Outcome, Slot};

    fn started() -> Game {
        Game::new()
            .add_player(&PlayerId::new("a"))
            .and_then(|g| g.add_player(&PlayerId::new("b")))
            .unwrap()
    }

    fn pos(i: usize) -> Position {
        Position::from_index(i).unwrap()
    }

    #[test]
    fn test_first_move_plays_x_and_flips_turn() {
        let game = started();
        let next = game
            .apply_move(&Session::player_session("a"), Position::CENTER)
            .unwrap();
        assert_eq!(next.board().get(Position::CENTER), Some(Mark::X));
        assert_eq!(next.turn(), Slot::Second);
        assert_eq!(next.outcome(), None);
    }

    #[test]
    fn test_input_untouched() {
        let game = started();
        let snapshot = game.clone();
        let _ = game
            .apply_move(&Session::player_session("a"), Position::CENTER)
            .unwrap();
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = started()
            .apply_move(&Session::player_session("a"), Position::CENTER)
            .unwrap();
        assert_eq!(
            game.apply_move(&Session::player_session("b"), Position::CENTER),
            Err(MoveError::SquareOccupied(Position::CENTER))
        );
    }

    #[test]
    fn test_winning_move_records_player_and_still_flips() {
        let (a, b) = (PlayerId::new("a"), PlayerId::new("b"));
        let game = started()
            .replay([(&a, pos(0)), (&b, pos(4)), (&a, pos(1)), (&b, pos(8)), (&a, pos(2))])
            .unwrap();
        assert_eq!(game.outcome(), Some(&Outcome::Winner(a.clone())));
        assert_eq!(game.turn(), Slot::Second);
        assert_eq!(
            game.apply_move(&Session::player_session("b"), pos(5)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_full_board_is_draw() {
        let (a, b) = (PlayerId::new("a"), PlayerId::new("b"));
        // x o x / x o o / o x x
        let game = started()
            .replay([
                (&a, pos(0)),
                (&b, pos(1)),
                (&a, pos(2)),
                (&b, pos(4)),
                (&a, pos(3)),
                (&b, pos(5)),
                (&a, pos(7)),
                (&b, pos(6)),
                (&a, pos(8)),
            ])
            .unwrap();
        assert_eq!(game.outcome(), Some(&Outcome::Draw));
    }

    #[test]
    fn test_debug_session_moves_for_either_side() {
        let admin = Session::debug_session("admin");
        let game = started()
            .apply_move(&admin, pos(0))
            .and_then(|g| g.apply_move(&admin, pos(3)))
            .unwrap();
        assert_eq!(game.board().get(pos(0)), Some(Mark::X));
        assert_eq!(game.board().get(pos(3)), Some(Mark::O));
    }
}
