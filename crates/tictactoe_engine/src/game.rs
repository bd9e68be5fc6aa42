//! The persisted game record of a room.
//!
//! Every operation borrows a [`Game`] and returns a replacement value; the
//! caller writes that value back to the store. Nothing here mutates its
//! input.

use super::action::Reset;
use super::phases::{Outcome, Phase};
use super::{Board, Mark, PlayerId, Slot};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Seconds on each clock when a game starts.
pub const INITIAL_CLOCK_SECS: u32 = 60;

fn default_clock_budget() -> u32 {
    INITIAL_CLOCK_SECS
}

/// One room's game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) turn: Slot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) outcome: Option<Outcome>,
    #[serde(default)]
    pub(crate) players: Vec<PlayerId>,
    pub(crate) clocks: [u32; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) rematch_id: Option<PlayerId>,
    #[serde(default)]
    pub(crate) private: bool,
    #[serde(default = "default_clock_budget")]
    pub(crate) clock_budget: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) last_tick: Option<u64>,
}

impl Game {
    /// Creates an empty public game with the default clocks.
    #[instrument]
    pub fn new() -> Self {
        Self::with_clock(INITIAL_CLOCK_SECS)
    }

    /// Creates an empty public game with `secs` on each clock.
    #[instrument]
    pub fn with_clock(secs: u32) -> Self {
        Self {
            board: Board::new(),
            turn: Slot::First,
            outcome: None,
            players: Vec::new(),
            clocks: [secs; 2],
            rematch_id: None,
            private: false,
            clock_budget: secs,
            last_tick: None,
        }
    }

    /// Same game, excluded from (or restored to) public listings.
    pub fn with_private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Slot whose mark is next.
    pub fn turn(&self) -> Slot {
        self.turn
    }

    /// Returns the outcome, if decided.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Players in join order.
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    /// Remaining seconds per slot.
    pub fn clocks(&self) -> [u32; 2] {
        self.clocks
    }

    /// Remaining seconds for one slot.
    pub fn clock(&self, slot: Slot) -> u32 {
        self.clocks[slot.index()]
    }

    /// Player a rematch has been offered to, if any.
    pub fn rematch_id(&self) -> Option<&PlayerId> {
        self.rematch_id.as_ref()
    }

    /// Whether the room is hidden from public listings.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Seconds each clock starts with.
    pub fn clock_budget(&self) -> u32 {
        self.clock_budget
    }

    /// Sequence number of the last applied clock tick.
    pub fn last_tick(&self) -> Option<u64> {
        self.last_tick
    }

    /// Mark to be played next.
    pub fn mark_on_turn(&self) -> Mark {
        self.turn.mark()
    }

    /// Player holding the turn, once that slot is filled.
    pub fn player_on_turn(&self) -> Option<&PlayerId> {
        self.player_in(self.turn)
    }

    /// Player registered in a slot.
    pub fn player_in(&self, slot: Slot) -> Option<&PlayerId> {
        self.players.get(slot.index())
    }

    /// Slot held by a player.
    pub fn slot_of(&self, player: &PlayerId) -> Option<Slot> {
        self.players
            .iter()
            .position(|p| p == player)
            .and_then(Slot::from_index)
    }

    /// Mark played by a player.
    pub fn mark_of(&self, player: &PlayerId) -> Option<Mark> {
        self.slot_of(player).map(Slot::mark)
    }

    /// Whether a player is registered in this room.
    pub fn has_player(&self, player: &PlayerId) -> bool {
        self.players.contains(player)
    }

    /// Whether an outcome is recorded.
    pub fn is_decided(&self) -> bool {
        self.outcome.is_some()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        match (self.outcome.is_some(), self.players.len()) {
            (true, _) => Phase::Decided,
            (false, 0) => Phase::Empty,
            (false, 1) => Phase::Waiting,
            (false, _) => Phase::Playing,
        }
    }

    /// Fresh game values keeping this game's players.
    ///
    /// With `reverse_players` the second joiner takes slot 0 and moves
    /// first. Clocks return to this game's budget; outcome, rematch offer
    /// and tick history are cleared. Privacy is kept.
    #[instrument(skip(self), fields(players = ?self.players))]
    pub fn reset(&self, options: Reset) -> Game {
        let mut players = self.players.clone();
        if options.reverse_players {
            players.reverse();
        }
        debug!(?players, "Resetting game");
        Game {
            players,
            private: self.private,
            ..Game::with_clock(self.clock_budget)
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
