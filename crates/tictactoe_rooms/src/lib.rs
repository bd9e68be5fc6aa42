//! Tic-tac-toe rooms - callers of the room engine.
//!
//! The engine computes replacement game values; this crate loads them
//! from a [`GameStore`], applies engine operations for a [`Session`] and
//! writes the results back.
//!
//! # Architecture
//!
//! - **Store**: the seam to the record store, with an in-memory stand-in
//! - **Service**: room operations (create, join, leave, play, tick, rematch)
//! - **Config**: TOML settings for new rooms and logging
//! - **Replay**: scripted games used by the CLI
//!
//! [`Session`]: tictactoe_engine::Session

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod service;
mod store;

pub use cli::{Cli, Command};
pub use config::{ConfigError, RoomsConfig};
pub use replay::{ReplayReport, replay_game};
pub use service::{RoomError, RoomService};
pub use store::{GameStore, MemoryStore, StoreError};
