//! Acting-player context and ephemeral handle generation.

use super::PlayerId;
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who is issuing an action.
///
/// Passed explicitly to every operation that depends on the acting
/// player. `debug` lets an operator move for whichever side is on turn.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, new)]
pub struct Session {
    player: PlayerId,
    debug: bool,
}

impl Session {
    /// Ordinary player session.
    pub fn player_session(player: impl Into<PlayerId>) -> Self {
        Self::new(player.into(), false)
    }

    /// Operator session allowed to move on either side's turn.
    pub fn debug_session(player: impl Into<PlayerId>) -> Self {
        Self::new(player.into(), true)
    }
}

const ADJECTIVES: [&str; 10] = [
    "Happy", "Sad", "Angry", "Funny", "Serious", "Colorful", "Boring", "Fast", "Slow", "Loud",
];

const NOUNS: [&str; 10] = [
    "Dog", "Cat", "Bird", "Fish", "Lion", "Tiger", "Bear", "Elephant", "Giraffe", "Whale",
];

/// Generates an ephemeral handle such as `FastTiger412`.
///
/// Adjective and noun are drawn uniformly; the number lies in `1..=1000`.
#[instrument(skip(rng))]
pub fn random_handle<R: Rng>(rng: &mut R) -> PlayerId {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Happy");
    let noun = NOUNS.choose(rng).copied().unwrap_or("Dog");
    let number = rng.gen_range(1..=1000);
    PlayerId::new(format!("{adjective}{noun}{number}"))
}
