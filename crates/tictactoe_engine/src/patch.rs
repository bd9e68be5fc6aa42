//! Partial updates merged over a stored game.

use super::phases::Outcome;
use super::{Board, Game, PlayerId, Slot};
use serde::Serialize;
use tracing::instrument;

/// Merge-overwrite update of the listed fields.
///
/// `None` leaves a field as stored. For the optional fields of [`Game`],
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamePatch {
    /// Replacement board.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<Board>,
    /// Replacement turn slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn: Option<Slot>,
    /// Replacement outcome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Option<Outcome>>,
    /// Replacement roster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<PlayerId>>,
    /// Replacement clocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clocks: Option<[u32; 2]>,
    /// Replacement rematch addressee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rematch_id: Option<Option<PlayerId>>,
    /// Replacement privacy flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

impl GamePatch {
    /// Patch replacing only the roster.
    pub fn players(players: Vec<PlayerId>) -> Self {
        Self {
            players: Some(players),
            ..Self::default()
        }
    }

    /// True when the patch lists no fields.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Game {
    /// Returns this game with `patch` merged over it.
    #[instrument(skip_all)]
    pub fn merge(&self, patch: GamePatch) -> Game {
        let mut next = self.clone();
        if let Some(board) = patch.board {
            next.board = board;
        }
        if let Some(turn) = patch.turn {
            next.turn = turn;
        }
        if let Some(outcome) = patch.outcome {
            next.outcome = outcome;
        }
        if let Some(players) = patch.players {
            next.players = players;
        }
        if let Some(clocks) = patch.clocks {
            next.clocks = clocks;
        }
        if let Some(rematch_id) = patch.rematch_id {
            next.rematch_id = rematch_id;
        }
        if let Some(private) = patch.private {
            next.private = private;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_changes_nothing() {
        let game = Game::new().with_private(true);
        assert!(GamePatch::default().is_empty());
        assert_eq!(game.merge(GamePatch::default()), game);
    }

    #[test]
    fn test_players_patch_touches_only_roster() {
        let game = Game::with_clock(30);
        let merged = game.merge(GamePatch::players(vec![PlayerId::new("a")]));
        assert_eq!(merged.players(), &[PlayerId::new("a")]);
        assert_eq!(merged.clocks(), [30, 30]);
    }

    #[test]
    fn test_patch_can_clear_optional_fields() {
        let mut game = Game::new();
        game.rematch_id = Some(PlayerId::new("b"));
        let patch = GamePatch {
            rematch_id: Some(None),
            ..GamePatch::default()
        };
        assert_eq!(game.merge(patch).rematch_id(), None);
    }

    #[test]
    fn test_serialized_patch_lists_only_set_fields() {
        let json = serde_json::to_value(GamePatch::players(vec![])).unwrap();
        assert_eq!(json, serde_json::json!({ "players": [] }));
    }
}
