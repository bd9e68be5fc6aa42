//! Roster invariant: at most two distinct players.

use super::super::Game;
use super::super::roster::MAX_PLAYERS;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: the roster holds at most two players, each once.
pub struct RosterInvariant;

impl Invariant<Game> for RosterInvariant {
    fn holds(game: &Game) -> bool {
        let players = game.players();
        let distinct: HashSet<_> = players.iter().collect();
        players.len() <= MAX_PLAYERS && distinct.len() == players.len()
    }

    fn description() -> &'static str {
        "Room holds at most two distinct players"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    #[test]
    fn test_duplicates_violate() {
        let mut game = Game::new();
        game.players = vec![PlayerId::new("a"), PlayerId::new("a")];
        assert!(!RosterInvariant::holds(&game));
    }

    #[test]
    fn test_three_players_violate() {
        let mut game = Game::new();
        game.players = ["a", "b", "c"].map(PlayerId::new).to_vec();
        assert!(!RosterInvariant::holds(&game));
    }
}
