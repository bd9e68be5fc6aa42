//! First-class action types for tic-tac-toe rooms.
//!
//! Actions carry the acting session alongside their payload, so they can
//! be validated against a game before being applied.

use super::{PlayerId, Position, Session};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A session placing the on-turn mark at a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Move {
    session: Session,
    position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.session.player(), self.position)
    }
}

/// Options for resetting a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, new)]
pub struct Reset {
    /// Swap join order so the other player moves first.
    pub reverse_players: bool,
}

/// Error rejecting a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already marked.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// An outcome is already recorded.
    #[display("Game is already over")]
    GameOver,

    /// Fewer than two players have joined.
    #[display("Waiting for an opponent to join")]
    WaitingForOpponent,

    /// The mover is not registered in this room.
    #[display("{} is not playing in this room", _0)]
    NotAPlayer(PlayerId),

    /// The mover is registered but the other player is on turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(PlayerId),

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Error rejecting a join.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum JoinError {
    /// Both slots are held by other players.
    #[display("Room is full, {} cannot join", _0)]
    RoomFull(PlayerId),

    /// The identifier is reserved for the stored draw outcome.
    #[display("Player id {} is reserved", _0)]
    ReservedId(PlayerId),
}

impl std::error::Error for JoinError {}

/// Error rejecting a clock tick.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ClockError {
    /// Clocks only run with two players.
    #[display("Clock does not run without an opponent")]
    WaitingForOpponent,

    /// Clocks stop once an outcome is recorded.
    #[display("Game is already over")]
    GameOver,

    /// Only the player on turn drives the clock.
    #[display("{} does not hold the turn", _0)]
    NotYourTurn(PlayerId),

    /// The tick was already applied or is older than the last one.
    #[display("Tick {} is not newer than last applied tick {}", tick, last)]
    StaleTick {
        /// Rejected tick sequence.
        tick: u64,
        /// Last applied tick sequence.
        last: u64,
    },
}

impl std::error::Error for ClockError {}

/// Error rejecting a rematch offer or acceptance.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RematchError {
    /// Caller is not registered in this room.
    #[display("{} is not playing in this room", _0)]
    NotAPlayer(PlayerId),

    /// Nobody to offer a rematch to.
    #[display("No opponent to offer a rematch to")]
    NoOpponent,

    /// An offer is already waiting for an answer.
    #[display("A rematch offer to {} is already pending", _0)]
    AlreadyPending(PlayerId),

    /// Nothing to accept.
    #[display("No rematch offer is pending")]
    NoPendingOffer,

    /// The pending offer is addressed to someone else.
    #[display("The pending rematch offer is for {}, not {}", addressee, caller)]
    NotAddressee {
        /// Player the offer was made to.
        addressee: PlayerId,
        /// Player who tried to accept.
        caller: PlayerId,
    },
}

impl std::error::Error for RematchError {}
