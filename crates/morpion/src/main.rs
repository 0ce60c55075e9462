//! Morpion - Unified CLI
//!
//! Terminal tic-tac-toe against a perfect-play opponent, plus
//! position analysis from the command line.

#![warn(missing_docs)]

mod cli;
mod config;
mod report;
mod tui;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use config::Settings;
use morpion_engine::{Board, GameMode, Side, evaluate_terminal, self_play};
use report::SolveReport;
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        None => run_play(PathBuf::from("morpion.toml"), None, false),
        Some(Command::Play {
            config,
            mode,
            computer_first,
        }) => run_play(config, mode, computer_first),
        Some(Command::Solve { board, side, json }) => {
            initialize_tracing();
            run_solve(&board, side, json)
        }
        Some(Command::Selfplay { board }) => {
            initialize_tracing();
            run_selfplay(board.as_deref())
        }
    }
}

/// Run the terminal UI
fn run_play(config: PathBuf, mode: Option<GameMode>, computer_first: bool) -> Result<()> {
    let settings = Settings::load_or_default(&config)
        .with_context(|| format!("Failed to load settings from {}", config.display()))?
        .with_overrides(mode, computer_first);
    tui::run_tui(settings)
}

/// Print the value and best move of a position
#[instrument]
fn run_solve(notation: &str, side: Option<Side>, json: bool) -> Result<()> {
    let board: Board = notation.parse().context("Invalid board")?;
    let report = SolveReport::compute(&board, side)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
    }
    Ok(())
}

/// Let the engine play both sides
#[instrument]
fn run_selfplay(notation: Option<&str>) -> Result<()> {
    let mut board = match notation {
        Some(n) => n.parse::<Board>().context("Invalid board")?,
        None => Board::new(),
    };
    let Some(to_move) = board.side_to_move() else {
        bail!("Cannot tell whose turn it is on {}", board.notation());
    };

    info!(board = %board.notation(), ?to_move, "Starting self-play");
    println!("{}\n", board);

    let moves = self_play(&mut board, to_move);
    let mut side = to_move;
    for (i, pos) in moves.iter().enumerate() {
        println!("{}. {} {}", i + 1, side, pos);
        side = side.opponent();
    }

    println!("\n{}\n", board);
    println!("{}", evaluate_terminal(&board));
    Ok(())
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
