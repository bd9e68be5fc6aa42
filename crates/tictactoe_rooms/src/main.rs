//! Tic-tac-toe rooms - CLI
//!
//! Generates handles, replays scripted games against an in-memory store
//! and prints configuration.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{Slot, format_clock, random_handle, summarize};
use tictactoe_rooms::{Cli, Command, MemoryStore, RoomService, RoomsConfig, replay_game};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => RoomsConfig::from_file(path)?,
        None => RoomsConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Handle { seed } => run_handle(seed),
        Command::Replay {
            moves,
            seed,
            think_secs,
            json,
        } => run_replay(config, &moves, seed, think_secs, json),
        Command::Config => run_config(&config),
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Print a random handle
#[instrument]
fn run_handle(seed: Option<u64>) -> Result<()> {
    println!("{}", random_handle(&mut rng_from(seed)));
    Ok(())
}

/// Replay a scripted game and print the final room
#[instrument(skip(config))]
fn run_replay(
    config: RoomsConfig,
    moves: &[tictactoe_engine::Position],
    seed: Option<u64>,
    think_secs: u32,
    json: bool,
) -> Result<()> {
    let service = RoomService::new(MemoryStore::new(), config);
    let mut rng = rng_from(seed);

    let report = replay_game(&service, &mut rng, moves, think_secs)?;
    let game = report.game();
    info!(moves = report.moves_played(), "Replay finished");

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", summarize(report.room(), game));
    println!("{}", game.board());
    for slot in Slot::ALL {
        if let Some(player) = game.player_in(slot) {
            println!(
                "{} ({}): {}",
                player,
                slot.mark(),
                format_clock(game.clock(slot))
            );
        }
    }
    match game.outcome() {
        Some(outcome) => println!("{}", outcome),
        None => println!("Undecided, {} to move", game.mark_on_turn()),
    }
    Ok(())
}

/// Print the effective configuration
#[instrument(skip(config))]
fn run_config(config: &RoomsConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
