//! Command-line interface for morpion.

use clap::{Parser, Subcommand};
use morpion_engine::{GameMode, Side};
use std::path::PathBuf;

/// Morpion - tic-tac-toe against an opponent that cannot be beaten
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Tic-tac-toe with a perfect-play minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to the settings file
        #[arg(short, long, default_value = "morpion.toml")]
        config: PathBuf,

        /// Game mode (vs-computer or two-humans), overrides the settings file
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// Let the computer take the first move
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the value and best move of a position
    Solve {
        /// Board notation, e.g. "XX./OO./..." (X moves first, '.' is empty)
        board: String,

        /// Side to search for (first or second); inferred from piece counts if omitted
        #[arg(short, long)]
        side: Option<Side>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let the engine play both sides and print the game
    Selfplay {
        /// Starting position (defaults to the empty board)
        #[arg(short, long)]
        board: Option<String>,
    },
}
