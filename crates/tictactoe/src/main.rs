//! Tic-tac-toe - terminal entry point.

#![warn(missing_docs)]

mod cli;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::{
    AppConfig, Renderer, Session, TextRenderer, init_tracing, init_tracing_best_effort,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_tracing(config.log())?;
            tictactoe::tui::run(&config)
        }
        Command::Replay { moves, json } => {
            // Replays only print to stdout; a missing log file is not fatal.
            init_tracing_best_effort(config.log());
            run_replay(&moves, json)
        }
    }
}

/// Plays `moves` headlessly and prints the outcome.
#[instrument]
fn run_replay(moves: &[u8], json: bool) -> Result<()> {
    let indices: Vec<usize> = moves.iter().map(|&m| usize::from(m)).collect();
    let mut session = Session::new();
    let state = *session.replay(&indices);
    info!(status = %state.status(), "Replay finished");

    let stdout = std::io::stdout();
    if json {
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &state)?;
        writeln!(out)?;
    } else {
        TextRenderer::new(stdout.lock()).render(&session.view())?;
    }
    Ok(())
}
