//! One-shot commands. Each returns the text to print so it can be tested
//! without a terminal.

use crate::cli::OutputFormat;
use derive_more::{Display, From};
use serde::Serialize;
use tictacturing::{
    GameSnapshot, GameState, HistoryError, MoveError, Square, SquareError, grid_to_square,
};
use tracing::{info, instrument};

/// Failure of a one-shot command.
#[derive(Debug, Display, From)]
pub enum CommandError {
    /// The stored history could not be replayed.
    #[display("{}", _0)]
    History(HistoryError),
    /// A square or grid token was malformed.
    #[display("{}", _0)]
    Square(SquareError),
    /// The move was refused.
    #[display("{}", _0)]
    Move(MoveError),
    /// JSON output failed.
    #[display("{}", _0)]
    Json(serde_json::Error),
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::History(e) => Some(e),
            CommandError::Square(e) => Some(e),
            CommandError::Move(e) => Some(e),
            CommandError::Json(e) => Some(e),
        }
    }
}

/// Uppercases and trims a typed grid address; the engine only accepts
/// the normalized form.
pub fn normalize_grid(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

/// Board and status for a history.
#[instrument]
pub fn show(history: &str, format: OutputFormat) -> Result<String, CommandError> {
    let game = GameState::parse(history)?;
    render(&game, format)
}

/// Free squares as grid addresses.
#[instrument]
pub fn moves(history: &str, format: OutputFormat) -> Result<String, CommandError> {
    let game = GameState::parse(history)?;
    let moves: Vec<String> = game.valid_moves().into_iter().map(Square::grid).collect();
    match format {
        OutputFormat::Text => Ok(format!("{}\n", moves.join(" "))),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&moves)? + "\n"),
    }
}

/// Applies one grid-address move. In text mode the first line is the new
/// history, ready to be stored.
#[instrument]
pub fn play(history: &str, grid: &str, format: OutputFormat) -> Result<String, CommandError> {
    let game = GameState::parse(history)?;
    let square = grid_to_square(&normalize_grid(grid))?;
    let next = game.apply_move(square)?;
    info!(from = %game, to = %next, "Move played");

    match format {
        OutputFormat::Text => Ok(format!("{}\n{}", next, render(&next, format)?)),
        OutputFormat::Json => render(&next, format),
    }
}

#[derive(Serialize)]
struct Conversion {
    square: String,
    grid: String,
}

/// Converts a grid address to a square label or back, by token length.
#[instrument]
pub fn convert(token: &str, format: OutputFormat) -> Result<String, CommandError> {
    let token = token.trim();
    let square = if token.chars().count() == 1 {
        Square::parse_label(&token.to_ascii_uppercase())?
    } else {
        grid_to_square(&normalize_grid(token))?
    };
    let conversion = Conversion {
        square: square.to_string(),
        grid: square.grid(),
    };

    match format {
        OutputFormat::Text if token.chars().count() == 1 => Ok(format!("{}\n", conversion.grid)),
        OutputFormat::Text => Ok(format!("{}\n", conversion.square)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&conversion)? + "\n"),
    }
}

/// Board plus status line, or the JSON snapshot.
pub fn render(game: &GameState, format: OutputFormat) -> Result<String, CommandError> {
    match format {
        OutputFormat::Text => Ok(format!("{}{}\n", game.render_board(), game.status_line())),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&GameSnapshot::from(game))? + "\n"),
    }
}
