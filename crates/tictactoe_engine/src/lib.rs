//! Tic-tac-toe room engine.
//!
//! Pure state transitions for a two-player room: joining and leaving,
//! placing marks, countdown clocks and rematches. Every operation borrows
//! a [`Game`] and returns the replacement value for the caller to store.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, Outcome, PlayerId, Position, Session};
//!
//! let (alice, bob) = (PlayerId::new("alice"), PlayerId::new("bob"));
//! let game = Game::new().add_player(&alice)?.add_player(&bob)?;
//!
//! let game = game.apply_move(&Session::player_session(alice.clone()), Position::CENTER)?;
//! assert_eq!(game.player_on_turn(), Some(&bob));
//! assert_eq!(game.outcome(), None::<&Outcome>);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod clock;
mod contracts;
mod game;
mod invariants;
mod lobby;
mod patch;
mod phases;
mod play;
mod position;
mod rematch;
mod roster;
mod session;
mod types;

pub mod rules;

pub use action::{ClockError, JoinError, Move, MoveError, RematchError, Reset};
pub use clock::{Tick, format_clock};
pub use contracts::{
    BoardGrewByOne, Contract, GameUndecided, LegalMove, MoveContract, MoversTurn, RosterComplete,
    SquareIsEmpty, TurnFlipped,
};
pub use game::{Game, INITIAL_CLOCK_SECS};
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, MarkBalanceInvariant, OutcomeConsistentInvariant,
    RoomInvariants, RosterInvariant,
};
pub use lobby::{RoomSummary, find_joinable, open_rooms, summarize};
pub use patch::GamePatch;
pub use phases::{DRAW_SENTINEL, Outcome, Phase};
pub use position::{Position, PositionError};
pub use roster::MAX_PLAYERS;
pub use session::{Session, random_handle};
pub use types::{Board, InvalidSlot, Mark, PlayerId, RoomId, Slot};
