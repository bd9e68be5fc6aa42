//! Command-line interface for tictactoe_rooms.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::Position;

/// Tic-tac-toe rooms - drive the room engine from the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rooms")]
#[command(about = "Tic-tac-toe room engine tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a random player handle
    Handle {
        /// Seed for reproducible handles
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Play a scripted two-player game in an in-memory room
    Replay {
        /// Moves as `row,col` or index 0-8, alternating x then o
        #[arg(required = true, num_args = 1..)]
        moves: Vec<Position>,

        /// Seed for handles and room id
        #[arg(long)]
        seed: Option<u64>,

        /// Seconds of clock to spend before each move
        #[arg(long, default_value = "0")]
        think_secs: u32,

        /// Print the final room as JSON instead of a board
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
