//! Rematch offers.
//!
//! Offering and accepting are separate operations. [`Game::rematch`]
//! keeps the single-button flow where the same action offers when nothing
//! is pending and accepts otherwise.

use super::action::{RematchError, Reset};
use super::{Game, Session};
use tracing::{info, instrument, warn};

impl Game {
    /// Offers a rematch to the caller's opponent.
    ///
    /// # Errors
    ///
    /// `NotAPlayer` for strangers, `NoOpponent` in a one-player room and
    /// `AlreadyPending` while an earlier offer is unanswered.
    #[instrument(skip(self), fields(rematch_id = ?self.rematch_id))]
    pub fn offer_rematch(&self, session: &Session) -> Result<Game, RematchError> {
        let caller = session.player();
        if let Some(pending) = &self.rematch_id {
            return Err(RematchError::AlreadyPending(pending.clone()));
        }
        if !self.has_player(caller) {
            warn!("Rematch offered by a non-participant");
            return Err(RematchError::NotAPlayer(caller.clone()));
        }
        let opponent = self
            .opponent_of(caller)
            .cloned()
            .ok_or(RematchError::NoOpponent)?;

        info!(to = %opponent, "Rematch offered");
        let mut next = self.clone();
        next.rematch_id = Some(opponent);
        Ok(next)
    }

    /// Accepts the pending offer, resetting with the turn order reversed.
    ///
    /// # Errors
    ///
    /// `NotAPlayer` when the caller is no longer in the room,
    /// `NoPendingOffer` when nothing was offered, `NotAddressee` when the
    /// offer was made to someone else.
    #[instrument(skip(self), fields(rematch_id = ?self.rematch_id))]
    pub fn accept_rematch(&self, session: &Session) -> Result<Game, RematchError> {
        let caller = session.player();
        if !self.has_player(caller) {
            warn!("Rematch accepted by a non-participant");
            return Err(RematchError::NotAPlayer(caller.clone()));
        }
        let addressee = self
            .rematch_id
            .as_ref()
            .ok_or(RematchError::NoPendingOffer)?;
        if addressee != caller {
            return Err(RematchError::NotAddressee {
                addressee: addressee.clone(),
                caller: caller.clone(),
            });
        }
        info!("Rematch accepted");
        Ok(self.reset(Reset::new(true)))
    }

    /// Offers when no offer is pending, accepts otherwise.
    ///
    /// Which one happens depends only on whether `rematch_id` is set;
    /// prefer [`offer_rematch`](Self::offer_rematch) and
    /// [`accept_rematch`](Self::accept_rematch) where the intent is known.
    #[instrument(skip(self), fields(rematch_id = ?self.rematch_id))]
    pub fn rematch(&self, session: &Session) -> Result<Game, RematchError> {
        if self.rematch_id.is_some() {
            self.accept_rematch(session)
        } else {
            self.offer_rematch(session)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, PlayerId};

    fn decided() -> Game {
        let mut game = Game::new()
            .add_player(&PlayerId::new("a"))
            .and_then(|g| g.add_player(&PlayerId::new("b")))
            .unwrap();
        game.outcome = Some(Outcome::Draw);
        game
    }

    #[test]
    fn test_offer_targets_opponent() {
        let game = decided()
            .offer_rematch(&Session::player_session("a"))
            .unwrap();
        assert_eq!(game.rematch_id(), Some(&PlayerId::new("b")));
    }

    #[test]
    fn test_offer_twice_rejected() {
        let game = decided()
            .offer_rematch(&Session::player_session("a"))
            .unwrap();
        assert_eq!(
            game.offer_rematch(&Session::player_session("b")),
            Err(RematchError::AlreadyPending(PlayerId::new("b")))
        );
    }

    #[test]
    fn test_offer_needs_opponent() {
        let game = Game::new().add_player(&PlayerId::new("a")).unwrap();
        assert_eq!(
            game.offer_rematch(&Session::player_session("a")),
            Err(RematchError::NoOpponent)
        );
    }

    #[test]
    fn test_offerer_cannot_accept_own_offer() {
        let game = decided()
            .offer_rematch(&Session::player_session("a"))
            .unwrap();
        assert_eq!(
            game.accept_rematch(&Session::player_session("a")),
            Err(RematchError::NotAddressee {
                addressee: PlayerId::new("b"),
                caller: PlayerId::new("a"),
            })
        );
    }

    #[test]
    fn test_departed_addressee_cannot_accept() {
        let mut game = decided()
            .offer_rematch(&Session::player_session("a"))
            .unwrap();
        game.players = vec![PlayerId::new("a")];
        assert_eq!(
            game.accept_rematch(&Session::player_session("b")),
            Err(RematchError::NotAPlayer(PlayerId::new("b")))
        );
    }

    #[test]
    fn test_accept_without_offer() {
        assert_eq!(
            decided().accept_rematch(&Session::player_session("b")),
            Err(RematchError::NoPendingOffer)
        );
    }

    #[test]
    fn test_single_button_flow() {
        let offered = decided().rematch(&Session::player_session("a")).unwrap();
        assert_eq!(offered.rematch_id(), Some(&PlayerId::new("b")));

        let restarted = offered.rematch(&Session::player_session("b")).unwrap();
        assert_eq!(restarted.players(), &[PlayerId::new("b"), PlayerId::new("a")]);
        assert_eq!(restarted.rematch_id(), None);
        assert_eq!(restarted.outcome(), None);
    }
}
