//! Room service: load, run an engine operation, write the result back.

use crate::config::RoomsConfig;
use crate::store::{GameStore, StoreError};
use rand::Rng;
use tictactoe_engine::{
    ClockError, Game, JoinError, MoveError, PlayerId, Position, RematchError, Reset, RoomId,
    RoomSummary, Session, Tick, find_joinable, open_rooms, summarize,
};
use tracing::{debug, info, instrument, warn};

/// Error from a room operation.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum RoomError {
    /// No record for the room.
    #[display("Room {} not found", _0)]
    #[from(ignore)]
    NotFound(RoomId),

    /// Move rejected by the engine.
    #[display("{}", _0)]
    Move(MoveError),

    /// Join rejected by the engine.
    #[display("{}", _0)]
    Join(JoinError),

    /// Clock tick rejected by the engine.
    #[display("{}", _0)]
    Clock(ClockError),

    /// Rematch action rejected by the engine.
    #[display("{}", _0)]
    Rematch(RematchError),

    /// The store failed.
    #[display("{}", _0)]
    Store(StoreError),
}

impl std::error::Error for RoomError {}

/// Operations a client issues against rooms.
#[derive(Debug, Clone)]
pub struct RoomService<S> {
    store: S,
    config: RoomsConfig,
}

impl<S: GameStore> RoomService<S> {
    /// Creates a service over `store`.
    pub fn new(store: S, config: RoomsConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Active configuration.
    pub fn config(&self) -> &RoomsConfig {
        &self.config
    }

    fn load(&self, room: &RoomId) -> Result<Game, RoomError> {
        self.store
            .get(room)?
            .ok_or_else(|| RoomError::NotFound(room.clone()))
    }

    fn save(&self, room: &RoomId, game: Game) -> Result<Game, RoomError> {
        self.store.put(room, game.clone())?;
        Ok(game)
    }

    /// Creates an empty room under a fresh id.
    ///
    /// `private` overrides the configured default.
    #[instrument(skip(self, rng))]
    pub fn create_room<R: Rng>(&self, rng: &mut R, private: Option<bool>) -> Result<RoomId, RoomError> {
        let room = RoomId::random(rng);
        let private = private.unwrap_or(*self.config.private_by_default());
        let game = Game::with_clock(*self.config.initial_clock_secs()).with_private(private);
        self.store.put(&room, game)?;
        info!(room_id = %room, private, "Room created");
        Ok(room)
    }

    /// Adds the session's player to a room.
    #[instrument(skip(self))]
    pub fn join(&self, room: &RoomId, session: &Session) -> Result<Game, RoomError> {
        let game = self.load(room)?.add_player(session.player())?;
        self.save(room, game)
    }

    /// Joins the first open room, creating a public one when none is open.
    ///
    /// A player already waiting in an open room gets that room back.
    #[instrument(skip(self, rng))]
    pub fn quick_join<R: Rng>(&self, rng: &mut R, session: &Session) -> Result<RoomId, RoomError> {
        let rooms = self.store.list()?;
        let found = find_joinable(rooms.iter().map(|(id, g)| (id, g)), session.player()).cloned();
        let room = match found {
            Some(room) => room,
            None => self.create_room(rng, Some(false))?,
        };
        self.join(&room, session)?;
        Ok(room)
    }

    /// Removes the session's player; the last player out deletes the room.
    ///
    /// Returns the remaining game, or `None` when the room was deleted.
    /// Leaving a room the player is not in changes nothing.
    #[instrument(skip(self))]
    pub fn leave(&self, room: &RoomId, session: &Session) -> Result<Option<Game>, RoomError> {
        let game = self.load(room)?;
        if !game.has_player(session.player()) {
            debug!(room_id = %room, "Leave from a non-participant ignored");
            return Ok(Some(game));
        }
        let patch = game.remove_player(session.player());
        if patch.players.as_ref().is_some_and(Vec::is_empty) {
            self.store.delete(room)?;
            info!(room_id = %room, "Last player left, room deleted");
            return Ok(None);
        }
        let remaining = game.merge(patch.clone());
        self.store.update(room, patch)?;
        Ok(Some(remaining))
    }

    /// Plays a move for the session.
    #[instrument(skip(self))]
    pub fn play(&self, room: &RoomId, session: &Session, position: Position) -> Result<Game, RoomError> {
        let game = self.load(room)?.apply_move(session, position)?;
        self.save(room, game)
    }

    /// Applies a clock tick from the session.
    #[instrument(skip(self))]
    pub fn tick(&self, room: &RoomId, session: &Session, tick: Tick) -> Result<Game, RoomError> {
        let game = self.load(room)?.tick_clock(session, tick)?;
        self.save(room, game)
    }

    /// Offers a rematch to the session's opponent.
    #[instrument(skip(self))]
    pub fn offer_rematch(&self, room: &RoomId, session: &Session) -> Result<Game, RoomError> {
        let game = self.load(room)?.offer_rematch(session)?;
        self.save(room, game)
    }

    /// Accepts a rematch offered to the session's player.
    #[instrument(skip(self))]
    pub fn accept_rematch(&self, room: &RoomId, session: &Session) -> Result<Game, RoomError> {
        let game = self.load(room)?.accept_rematch(session)?;
        self.save(room, game)
    }

    /// Resets a room's game, keeping its players.
    #[instrument(skip(self))]
    pub fn reset(&self, room: &RoomId, options: Reset) -> Result<Game, RoomError> {
        let game = self.load(room)?.reset(options);
        self.save(room, game)
    }

    /// Public rooms waiting for a second player.
    #[instrument(skip(self))]
    pub fn open_rooms(&self) -> Result<Vec<RoomId>, RoomError> {
        let rooms = self.store.list()?;
        Ok(open_rooms(rooms.iter().map(|(id, g)| (id, g)))
            .into_iter()
            .cloned()
            .collect())
    }

    /// Rooms the player is registered in.
    #[instrument(skip(self))]
    pub fn rooms_of(&self, player: &PlayerId) -> Result<Vec<RoomId>, RoomError> {
        Ok(self
            .store
            .list()?
            .into_iter()
            .filter(|(_, game)| game.has_player(player))
            .map(|(id, _)| id)
            .collect())
    }

    /// Summaries of every room, public or not.
    #[instrument(skip(self))]
    pub fn admin_rooms(&self) -> Result<Vec<RoomSummary>, RoomError> {
        Ok(self
            .store
            .list()?
            .iter()
            .map(|(id, game)| summarize(id, game))
            .collect())
    }

    /// Deletes every room.
    #[instrument(skip(self))]
    pub fn admin_delete_all(&self) -> Result<usize, RoomError> {
        let count = self.store.delete_all()?;
        warn!(count, "Admin deleted all rooms");
        Ok(count)
    }
}
