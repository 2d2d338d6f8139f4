//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Apply a list of moves and print the resulting board
    Replay {
        /// Comma-separated cell indices (0-8, row-major)
        #[arg(short, long, value_delimiter = ',', value_parser = clap::value_parser!(u8).range(0..=8))]
        moves: Vec<u8>,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
