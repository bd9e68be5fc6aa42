//! Game phases and terminal outcomes.

use super::PlayerId;
use serde::{Deserialize, Serialize};

/// Stored value marking a drawn game.
pub const DRAW_SENTINEL: &str = "draw";

/// Terminal result of a game.
///
/// Stored as the winner's identifier or the [`DRAW_SENTINEL`] string, so
/// no player may use the sentinel as an identifier; joins under it are
/// refused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    /// Player won, by a line or on time.
    Winner(PlayerId),
    /// Board filled with no line.
    Draw,
}

impl From<String> for Outcome {
    fn from(value: String) -> Self {
        if value == DRAW_SENTINEL {
            Outcome::Draw
        } else {
            Outcome::Winner(PlayerId::new(value))
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(player) => player.as_str().to_string(),
            Outcome::Draw => DRAW_SENTINEL.to_string(),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where a room sits in its lifecycle.
///
/// `Empty → Waiting → Playing → Decided`, with reset returning a
/// decided game to `Playing` (or `Empty` when nobody is left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// No players.
    Empty,
    /// One player, waiting for an opponent.
    Waiting,
    /// Two players, no outcome.
    Playing,
    /// Outcome recorded.
    Decided,
}
