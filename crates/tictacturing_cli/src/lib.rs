//! Terminal front end for the tic-tac-turing engine.
//!
//! Plays the part of the session layer locally: it loads a history string,
//! translates typed grid addresses, applies moves, and prints the board.
//! Nothing is persisted; the printed history is the state to keep.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;
mod hotseat;

pub use cli::{Cli, Command, OutputFormat};
pub use commands::{CommandError, convert, moves, normalize_grid, play, render, show};
pub use config::{CONFIG_ENV, CliConfig, ConfigError};
pub use hotseat::{Hotseat, SessionEnd, game_over_message};
