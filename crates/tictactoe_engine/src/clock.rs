//! Countdown clocks.
//!
//! Ticks are numbered by a single authority (for example, whole seconds
//! since the game started). A game remembers the last tick it applied and
//! refuses anything not newer, so repeated or concurrent delivery of the
//! same tick decrements once.

use super::action::ClockError;
use super::phases::Outcome;
use super::{Game, Session};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One clock decrement, identified by a monotonic sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, new)]
pub struct Tick {
    seq: u64,
}

impl Tick {
    /// The tick following the last one `game` applied.
    pub fn next_after(game: &Game) -> Tick {
        Tick::new(game.last_tick().map_or(0, |last| last + 1))
    }
}

impl Game {
    /// Takes one second off the clock of the slot holding the turn.
    ///
    /// When that clock reaches zero the other player wins on time in the
    /// same update; the exhausted clock stays at zero.
    ///
    /// # Errors
    ///
    /// `WaitingForOpponent`, `GameOver`, `NotYourTurn` when `session` is
    /// not the player on turn, and `StaleTick` when `tick` is not newer
    /// than the last applied one.
    #[instrument(skip(self), fields(turn = ?self.turn, clocks = ?self.clocks))]
    pub fn tick_clock(&self, session: &Session, tick: Tick) -> Result<Game, ClockError> {
        if self.players.len() < 2 {
            return Err(ClockError::WaitingForOpponent);
        }
        if self.is_decided() {
            return Err(ClockError::GameOver);
        }
        if self.player_on_turn() != Some(session.player()) {
            warn!("Tick from a player not on turn");
            return Err(ClockError::NotYourTurn(session.player().clone()));
        }
        if let Some(last) = self.last_tick
            && tick.seq <= last
        {
            debug!(tick = tick.seq, last, "Ignoring stale tick");
            return Err(ClockError::StaleTick {
                tick: tick.seq,
                last,
            });
        }

        let slot = self.turn;
        let mut next = self.clone();
        let remaining = self.clocks[slot.index()].saturating_sub(1);
        next.clocks[slot.index()] = remaining;
        next.last_tick = Some(tick.seq);

        if remaining == 0 {
            next.outcome = self
                .player_in(slot.other())
                .cloned()
                .map(Outcome::Winner);
            info!(winner = ?next.outcome, "Clock ran out");
        }
        Ok(next)
    }
}

/// Renders seconds as `m:ss`, e.g. `90` as `1:30`.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}
