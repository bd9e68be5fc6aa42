//! Joining, leaving and opponent lookup.

use super::action::JoinError;
use super::patch::GamePatch;
use super::phases::DRAW_SENTINEL;
use super::{Game, PlayerId};
use tracing::{debug, instrument, warn};

/// Most players a room holds.
pub const MAX_PLAYERS: usize = 2;

impl Game {
    /// Registers `player` in the next free slot.
    ///
    /// Joining twice is a no-op and never reorders the roster. A third
    /// distinct player is turned away.
    ///
    /// # Errors
    ///
    /// Returns `JoinError::RoomFull` when both slots belong to others and
    /// `JoinError::ReservedId` for the draw sentinel.
    #[instrument(skip(self), fields(players = ?self.players))]
    pub fn add_player(&self, player: &PlayerId) -> Result<Game, JoinError> {
        if player.as_str() == DRAW_SENTINEL {
            warn!("Join under the draw sentinel");
            return Err(JoinError::ReservedId(player.clone()));
        }
        if self.has_player(player) {
            debug!("Player already registered");
            return Ok(self.clone());
        }
        if self.players.len() >= MAX_PLAYERS {
            warn!("Room is full");
            return Err(JoinError::RoomFull(player.clone()));
        }
        let mut next = self.clone();
        next.players.push(player.clone());
        debug!(slot = next.players.len() - 1, "Player joined");
        Ok(next)
    }

    /// Roster without `player`, as a patch to merge.
    ///
    /// Order among the remaining players is preserved. A rematch offer
    /// addressed to the leaver is withdrawn; no other field is touched.
    #[instrument(skip(self), fields(players = ?self.players))]
    pub fn remove_player(&self, player: &PlayerId) -> GamePatch {
        let players = self
            .players
            .iter()
            .filter(|p| *p != player)
            .cloned()
            .collect();
        let mut patch = GamePatch::players(players);
        if self.rematch_id.as_ref() == Some(player) {
            debug!("Withdrawing rematch offer to leaver");
            patch.rematch_id = Some(None);
        }
        patch
    }

    /// The other registered player.
    ///
    /// Logs a warning and returns `None` when `player` is not in this
    /// room; also `None` while the opponent's slot is empty.
    #[instrument(skip(self), fields(players = ?self.players))]
    pub fn opponent_of(&self, player: &PlayerId) -> Option<&PlayerId> {
        match self.slot_of(player) {
            Some(slot) => self.player_in(slot.other()),
            None => {
                warn!("Opponent requested for a non-participant");
                None
            }
        }
    }
}
