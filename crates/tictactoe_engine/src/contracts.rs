//! Contract-based validation for moves.
//!
//! Contracts pair preconditions checked before an action with
//! postconditions relating the state before and after: {P} action {Q}.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, RoomInvariants};
use super::{Game, Mark};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Error reported when a condition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Self::Error>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: no outcome is recorded.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects moves on a decided game.
    #[instrument(skip_all)]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_decided() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: both slots are filled.
pub struct RosterComplete;

impl RosterComplete {
    /// Rejects moves before an opponent has joined.
    #[instrument(skip_all)]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.players().len() < 2 {
            Err(MoveError::WaitingForOpponent)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the mover holds the turn, or moves with the debug override.
pub struct MoversTurn;

impl MoversTurn {
    /// Rejects strangers and players moving out of turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        let session = mov.session();
        if *session.debug() {
            return Ok(());
        }
        let player = session.player();
        if !game.has_player(player) {
            return Err(MoveError::NotAPlayer(player.clone()));
        }
        if game.player_on_turn() != Some(player) {
            return Err(MoveError::NotYourTurn(player.clone()));
        }
        Ok(())
    }
}

/// Precondition: the target cell is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto marked cells.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        if game.board().is_empty(*mov.position()) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(*mov.position()))
        }
    }
}

/// Composite precondition for a legal move.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, reporting the first failure.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), MoveError> {
        GameUndecided::check(game)?;
        RosterComplete::check(game)?;
        MoversTurn::check(mov, game)?;
        SquareIsEmpty::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Postconditions
// ─────────────────────────────────────────────────────────────

/// Postcondition: marked cells keep their marks and exactly one is added.
pub struct BoardGrewByOne;

impl BoardGrewByOne {
    /// Compares boards before and after a move.
    pub fn holds(before: &Game, after: &Game) -> bool {
        let kept = before
            .board()
            .rows()
            .iter()
            .flatten()
            .zip(after.board().rows().iter().flatten())
            .all(|(b, a)| b.is_none() || b == a);
        let count = |g: &Game| g.board().count(Mark::X) + g.board().count(Mark::O);
        let valid = kept && count(after) == count(before) + 1;
        if !valid {
            warn!("Board changed beyond a single new mark");
        }
        valid
    }
}

/// Postcondition: the turn passed to the other slot.
pub struct TurnFlipped;

impl TurnFlipped {
    /// Compares turns before and after a move.
    pub fn holds(before: &Game, after: &Game) -> bool {
        after.turn() == before.turn().other()
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: undecided, two players, mover on turn, empty cell.
/// Postconditions: one new mark, turn flipped, room invariants hold.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    type Error = MoveError;

    fn pre(game: &Game, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), MoveError> {
        if !BoardGrewByOne::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: board must grow by exactly one mark".to_string(),
            ));
        }
        if !TurnFlipped::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: turn must pass to the other slot".to_string(),
            ));
        }
        RoomInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlayerId, Position, Session};

    fn started() -> Game {
        Game::new()
            .add_player(&PlayerId::new("a"))
            .and_then(|g| g.add_player(&PlayerId::new("b")))
            .unwrap()
    }

    #[test]
    fn test_precondition_empty_square() {
        let action = Move::new(Session::player_session("a"), Position::CENTER);
        assert!(MoveContract::pre(&started(), &action).is_ok());
    }

    #[test]
    fn test_precondition_waiting_for_opponent() {
        let game = Game::new().add_player(&PlayerId::new("a")).unwrap();
        let action = Move::new(Session::player_session("a"), Position::CENTER);
        assert_eq!(
            MoveContract::pre(&game, &action),
            Err(MoveError::WaitingForOpponent)
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let action = Move::new(Session::player_session("b"), Position::CENTER);
        assert_eq!(
            MoveContract::pre(&started(), &action),
            Err(MoveError::NotYourTurn(PlayerId::new("b")))
        );
    }

    #[test]
    fn test_precondition_stranger() {
        let action = Move::new(Session::player_session("eve"), Position::CENTER);
        assert_eq!(
            MoveContract::pre(&started(), &action),
            Err(MoveError::NotAPlayer(PlayerId::new("eve")))
        );
    }

    #[test]
    fn test_debug_override_skips_turn_check() {
        let action = Move::new(Session::debug_session("admin"), Position::CENTER);
        assert!(MoveContract::pre(&started(), &action).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = started();
        let after = before
            .apply_move(&Session::player_session("a"), Position::CENTER)
            .unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = started();
        let mut after = before
            .apply_move(&Session::player_session("a"), Position::CENTER)
            .unwrap();
        after.board = after.board.with_mark(Position::TOP_LEFT, Mark::O);
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
