//! Matchmaking and admin listings over stored rooms.

use super::phases::{Outcome, Phase};
use super::{Game, PlayerId, RoomId};
use derive_getters::Getters;
use serde::Serialize;
use tracing::{debug, instrument};

/// Public rooms with one player waiting for an opponent.
#[instrument(skip_all)]
pub fn open_rooms<'a, I>(rooms: I) -> Vec<&'a RoomId>
where
    I: IntoIterator<Item = (&'a RoomId, &'a Game)>,
{
    let open: Vec<_> = rooms
        .into_iter()
        .filter(|(_, game)| !game.is_private() && game.phase() == Phase::Waiting)
        .map(|(id, _)| id)
        .collect();
    debug!(count = open.len(), "Listed open rooms");
    open
}

/// Open room for `player` to play in.
///
/// A public room where `player` already waits alone comes first, so a
/// player never waits in two rooms; otherwise the first public room with
/// someone else waiting.
#[instrument(skip(rooms))]
pub fn find_joinable<'a, I>(rooms: I, player: &PlayerId) -> Option<&'a RoomId>
where
    I: IntoIterator<Item = (&'a RoomId, &'a Game)>,
{
    let mut joinable = None;
    for (id, game) in rooms {
        if game.is_private() || game.phase() != Phase::Waiting {
            continue;
        }
        if game.has_player(player) {
            debug!(room_id = %id, "Player already waiting");
            return Some(id);
        }
        joinable.get_or_insert(id);
    }
    joinable
}

/// One line of the admin room listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RoomSummary {
    id: RoomId,
    players: Vec<PlayerId>,
    phase: Phase,
    outcome: Option<Outcome>,
    private: bool,
}

/// Summarizes a stored room.
pub fn summarize(id: &RoomId, game: &Game) -> RoomSummary {
    RoomSummary {
        id: id.clone(),
        players: game.players().to_vec(),
        phase: game.phase(),
        outcome: game.outcome().cloned(),
        private: game.is_private(),
    }
}

impl std::fmt::Display for RoomSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let players: Vec<_> = self.players.iter().map(PlayerId::as_str).collect();
        write!(f, "{} [{}] {}", self.id, self.phase, players.join(" vs "))?;
        if let Some(outcome) = &self.outcome {
            write!(f, " ({})", outcome)?;
        }
        if self.private {
            write!(f, " private")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(players: &[&str], private: bool) -> Game {
        players
            .iter()
            .try_fold(Game::new().with_private(private), |g, p| {
                g.add_player(&PlayerId::new(*p))
            })
            .unwrap()
    }

    #[test]
    fn test_open_rooms_lists_public_waiting_only() {
        let rooms = vec![
            (RoomId::new("empty"), room(&[], false)),
            (RoomId::new("waiting"), room(&["a"], false)),
            (RoomId::new("hidden"), room(&["b"], true)),
            (RoomId::new("full"), room(&["c", "d"], false)),
        ];
        let open = open_rooms(rooms.iter().map(|(id, g)| (id, g)));
        assert_eq!(open, vec![&RoomId::new("waiting")]);
    }

    #[test]
    fn test_find_joinable_returns_own_waiting_room() {
        let rooms = vec![
            (RoomId::new("theirs"), room(&["you"], false)),
            (RoomId::new("mine"), room(&["me"], false)),
        ];
        let found = find_joinable(rooms.iter().map(|(id, g)| (id, g)), &PlayerId::new("me"));
        assert_eq!(found, Some(&RoomId::new("mine")));
    }

    #[test]
    fn test_find_joinable_skips_private_and_full_rooms() {
        let rooms = vec![
            (RoomId::new("hidden"), room(&["you"], true)),
            (RoomId::new("full"), room(&["c", "d"], false)),
            (RoomId::new("open"), room(&["e"], false)),
        ];
        let found = find_joinable(rooms.iter().map(|(id, g)| (id, g)), &PlayerId::new("me"));
        assert_eq!(found, Some(&RoomId::new("open")));
    }

    #[test]
    fn test_summary_display() {
        let summary = summarize(&RoomId::new("r1"), &room(&["a", "b"], true));
        assert_eq!(summary.to_string(), "r1 [Playing] a vs b private");
    }
}
