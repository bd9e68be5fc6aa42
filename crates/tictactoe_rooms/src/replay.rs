//! Scripted hot-seat games through the room service.

use crate::service::{RoomError, RoomService};
use crate::store::GameStore;
use derive_getters::Getters;
use rand::Rng;
use serde::Serialize;
use tictactoe_engine::{Game, MoveError, PlayerId, Position, RoomId, Session, Tick, random_handle};
use tracing::{debug, info, instrument};

/// Result of a scripted game.
#[derive(Debug, Clone, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    room: RoomId,
    players: [PlayerId; 2],
    game: Game,
    moves_played: usize,
}

/// Plays `moves` in a new room between two random handles.
///
/// Before each move the player on turn spends `think_secs` clock ticks.
/// Stops early once the game is decided, by a line or on time.
///
/// # Errors
///
/// Fails on the first move or tick the engine rejects.
#[instrument(skip(service, rng))]
pub fn replay_game<S, R>(
    service: &RoomService<S>,
    rng: &mut R,
    moves: &[Position],
    think_secs: u32,
) -> Result<ReplayReport, RoomError>
where
    S: GameStore,
    R: Rng,
{
    let first = random_handle(rng);
    let mut second = random_handle(rng);
    while second == first {
        second = random_handle(rng);
    }

    let room = service.create_room(rng, None)?;
    service.join(&room, &Session::player_session(first.clone()))?;
    let mut game = service.join(&room, &Session::player_session(second.clone()))?;
    info!(room_id = %room, x = %first, o = %second, "Replay started");

    let mut moves_played = 0;
    'moves: for &position in moves {
        let mover = game
            .player_on_turn()
            .cloned()
            .ok_or(MoveError::WaitingForOpponent)?;
        let session = Session::player_session(mover);

        for _ in 0..think_secs {
            game = service.tick(&room, &session, Tick::next_after(&game))?;
            if game.is_decided() {
                break 'moves;
            }
        }

        game = service.play(&room, &session, position)?;
        moves_played += 1;
        debug!(%position, "Replayed move");
        if game.is_decided() {
            break;
        }
    }

    Ok(ReplayReport {
        room,
        players: [first, second],
        game,
        moves_played,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemoryStore, RoomsConfig};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tictactoe_engine::Outcome;

    fn service(toml: &str) -> RoomService<MemoryStore> {
        RoomService::new(MemoryStore::new(), RoomsConfig::from_toml(toml).unwrap())
    }

    fn positions(indices: &[usize]) -> Vec<Position> {
        indices
            .iter()
            .map(|i| Position::from_index(*i).unwrap())
            .collect()
    }

    #[test]
    fn test_replay_stops_at_win() {
        let service = service("");
        let mut rng = StdRng::seed_from_u64(1);
        let report = replay_game(&service, &mut rng, &positions(&[0, 3, 1, 4, 2, 5]), 0).unwrap();
        assert_eq!(*report.moves_played(), 5);
        assert_eq!(
            report.game().outcome(),
            Some(&Outcome::Winner(report.players()[0].clone()))
        );
        assert_eq!(
            service.store().get(report.room()).unwrap().as_ref(),
            Some(report.game())
        );
    }

    #[test]
    fn test_replay_time_forfeit() {
        let service = service("initial_clock_secs = 3");
        let mut rng = StdRng::seed_from_u64(2);
        let report = replay_game(&service, &mut rng, &positions(&[4, 0, 8]), 2).unwrap();
        // x spends 2s, moves; o spends 2s, moves; x's third second runs out.
        assert_eq!(*report.moves_played(), 2);
        assert_eq!(report.game().clocks(), [0, 1]);
        assert_eq!(
            report.game().outcome(),
            Some(&Outcome::Winner(report.players()[1].clone()))
        );
    }

    #[test]
    fn test_report_json_fields() {
        let service = service("");
        let mut rng = StdRng::seed_from_u64(4);
        let report = replay_game(&service, &mut rng, &positions(&[4]), 0).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["movesPlayed"], 1);
        assert_eq!(json["room"], report.room().as_str());
        assert_eq!(json["game"]["players"][0], report.players()[0].as_str());
    }

    #[test]
    fn test_replay_surfaces_rejected_move() {
        let service = service("");
        let mut rng = StdRng::seed_from_u64(3);
        let result = replay_game(&service, &mut rng, &positions(&[4, 4]), 0);
        assert!(matches!(
            result,
            Err(RoomError::Move(MoveError::SquareOccupied(_)))
        ));
    }
}
