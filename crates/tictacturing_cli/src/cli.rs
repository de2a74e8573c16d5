//! Command-line interface for tictacturing.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Tic-Tac-Turing - replay, inspect and extend tic-tac-toe move histories
#[derive(Parser, Debug)]
#[command(name = "tictacturing")]
#[command(about = "Replay and extend tic-tac-toe move histories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to TICTACTURING_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the board for a history
    Show {
        /// Move history, square labels A-I in play order
        #[arg(default_value = "")]
        history: String,
    },

    /// List the free squares as grid addresses
    Moves {
        /// Move history, square labels A-I in play order
        #[arg(default_value = "")]
        history: String,
    },

    /// Apply one move and print the new history
    Play {
        /// Move history, square labels A-I in play order ("" for a new game)
        history: String,

        /// Grid address of the move, e.g. B2 (case-insensitive)
        grid: String,
    },

    /// Convert between a grid address (B2) and a square label (E)
    Convert {
        /// Two characters for a grid address, one for a square label
        token: String,
    },

    /// Play both sides at this terminal
    Hotseat {
        /// History to resume from
        #[arg(short = 'H', long, default_value = "")]
        history: String,
    },
}

/// How command output is written.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Board drawings and plain lines.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}
