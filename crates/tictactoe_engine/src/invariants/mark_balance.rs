//! Mark balance invariant: turns alternate x, o, x, o, ...

use super::super::{Game, Mark, Slot};
use super::Invariant;

/// Invariant: mark counts agree with the turn.
///
/// `x` always opens, so either both marks appear equally often and slot 0
/// is on turn, or `x` leads by one and slot 1 is on turn.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        match game.turn() {
            Slot::First => x == o,
            Slot::Second => x == o + 1,
        }
    }

    fn description() -> &'static str {
        "Marks alternate starting with x, and the turn matches the mark counts"
    }
}
