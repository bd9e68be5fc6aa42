//! The seam to the realtime store that owns game records.

use derive_more::{Display, Error};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tictactoe_engine::{Game, GamePatch, RoomId};
use tracing::{debug, info, instrument, warn};

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Collection of game records keyed by room.
///
/// Writes are whole-record `put`s, field merges via `update`, and
/// deletions. Implementations decide how records are persisted and
/// shared between clients.
pub trait GameStore {
    /// Every stored room.
    fn list(&self) -> Result<Vec<(RoomId, Game)>, StoreError>;

    /// One room, if stored.
    fn get(&self, id: &RoomId) -> Result<Option<Game>, StoreError>;

    /// Stores `game` under `id`, replacing any previous record.
    fn put(&self, id: &RoomId, game: Game) -> Result<(), StoreError>;

    /// Merges `patch` over the stored record.
    fn update(&self, id: &RoomId, patch: GamePatch) -> Result<(), StoreError>;

    /// Removes a room. Removing a missing room is not an error.
    fn delete(&self, id: &RoomId) -> Result<(), StoreError>;

    /// Removes every room, returning how many were removed.
    fn delete_all(&self) -> Result<usize, StoreError>;
}

/// In-process store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rooms: Arc<Mutex<BTreeMap<RoomId, Game>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating in-memory game store");
        Self::default()
    }

    #[track_caller]
    fn rooms(&self) -> Result<MutexGuard<'_, BTreeMap<RoomId, Game>>, StoreError> {
        self.rooms
            .lock()
            .map_err(|e| StoreError::new(format!("Store lock poisoned: {}", e)))
    }
}

impl GameStore for MemoryStore {
    #[instrument(skip(self))]
    fn list(&self) -> Result<Vec<(RoomId, Game)>, StoreError> {
        let rooms = self.rooms()?;
        debug!(count = rooms.len(), "Listed rooms");
        Ok(rooms
            .iter()
            .map(|(id, game)| (id.clone(), game.clone()))
            .collect())
    }

    #[instrument(skip(self))]
    fn get(&self, id: &RoomId) -> Result<Option<Game>, StoreError> {
        let game = self.rooms()?.get(id).cloned();
        if game.is_none() {
            debug!(room_id = %id, "Room not found");
        }
        Ok(game)
    }

    #[instrument(skip(self, game))]
    fn put(&self, id: &RoomId, game: Game) -> Result<(), StoreError> {
        self.rooms()?.insert(id.clone(), game);
        debug!(room_id = %id, "Room stored");
        Ok(())
    }

    #[instrument(skip(self))]
    fn update(&self, id: &RoomId, patch: GamePatch) -> Result<(), StoreError> {
        let mut rooms = self.rooms()?;
        let Some(game) = rooms.get(id) else {
            warn!(room_id = %id, "Update for missing room");
            return Err(StoreError::new(format!("Room {} not found", id)));
        };
        let merged = game.merge(patch);
        rooms.insert(id.clone(), merged);
        debug!(room_id = %id, "Room updated");
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete(&self, id: &RoomId) -> Result<(), StoreError> {
        if self.rooms()?.remove(id).is_some() {
            info!(room_id = %id, "Room deleted");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_all(&self) -> Result<usize, StoreError> {
        let mut rooms = self.rooms()?;
        let count = rooms.len();
        rooms.clear();
        info!(count, "Deleted all rooms");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::PlayerId;

    #[test]
    fn test_put_get_delete() {
        let store = MemoryStore::new();
        let id = RoomId::new("r1");
        store.put(&id, Game::new()).unwrap();
        assert_eq!(store.get(&id).unwrap(), Some(Game::new()));
        store.delete(&id).unwrap();
        assert_eq!(store.get(&id).unwrap(), None);
        store.delete(&id).unwrap();
    }

    #[test]
    fn test_update_merges_listed_fields() {
        let store = MemoryStore::new();
        let id = RoomId::new("r1");
        store.put(&id, Game::with_clock(30)).unwrap();
        store
            .update(&id, GamePatch::players(vec![PlayerId::new("a")]))
            .unwrap();
        let game = store.get(&id).unwrap().unwrap();
        assert_eq!(game.players(), &[PlayerId::new("a")]);
        assert_eq!(game.clocks(), [30, 30]);
    }

    #[test]
    fn test_update_missing_room_fails() {
        let store = MemoryStore::new();
        let result = store.update(&RoomId::new("nope"), GamePatch::default());
        assert!(result.unwrap_err().message.contains("not found"));
    }

    #[test]
    fn test_clones_share_records() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.put(&RoomId::new("r1"), Game::new()).unwrap();
        store.put(&RoomId::new("r2"), Game::new()).unwrap();
        assert_eq!(other.list().unwrap().len(), 2);
        assert_eq!(other.delete_all().unwrap(), 2);
        assert!(store.list().unwrap().is_empty());
    }
}
