//! Local two-player session.
//!
//! Stands in for the remote session layer: it shows the board, asks the
//! player to move for a grid address, retries a bounded number of times on
//! bad input, and stops when the game ends.

use crate::commands::normalize_grid;
use std::io::{self, BufRead, Write};
use tictacturing::{GameState, Outcome, grid_to_square};
use tracing::{info, instrument, warn};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEnd {
    /// The game reached a terminal outcome.
    Finished(GameState),
    /// A player used up every attempt on invalid input.
    TurnAborted(GameState),
    /// Input ran out before the game ended.
    InputClosed(GameState),
}

impl SessionEnd {
    /// The game as it stood when the session stopped.
    pub fn game(&self) -> &GameState {
        match self {
            SessionEnd::Finished(g) | SessionEnd::TurnAborted(g) | SessionEnd::InputClosed(g) => g,
        }
    }
}

/// Drives a game from `input` to `output`.
#[derive(Debug)]
pub struct Hotseat<R, W> {
    input: R,
    output: W,
    max_attempts: u8,
}

impl<R: BufRead, W: Write> Hotseat<R, W> {
    /// Creates a session allowing `max_attempts` invalid inputs per turn.
    pub fn new(input: R, output: W, max_attempts: u8) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Plays from `game` until it ends, a turn is aborted, or input closes.
    ///
    /// # Errors
    ///
    /// Only I/O failures; rejected moves are reported to the player.
    #[instrument(skip(self, game), fields(history = %game))]
    pub fn run(mut self, mut game: GameState) -> io::Result<SessionEnd> {
        info!("Session started");
        loop {
            write!(self.output, "{}", game.render_board())?;

            let Some(player) = game.current_player() else {
                writeln!(self.output, "{}", game_over_message(game.outcome()))?;
                writeln!(self.output, "History: {}", game)?;
                info!(outcome = %game.outcome(), "Session finished");
                return Ok(SessionEnd::Finished(game));
            };

            let mut remaining = self.max_attempts;
            loop {
                if remaining == 0 {
                    writeln!(
                        self.output,
                        "Too many invalid move attempts. Turn aborted."
                    )?;
                    writeln!(self.output, "History: {}", game)?;
                    warn!(%player, "Turn aborted");
                    return Ok(SessionEnd::TurnAborted(game));
                }

                write!(self.output, "{} to move (A1-C3): ", player)?;
                self.output.flush()?;

                let mut line = String::new();
                if self.input.read_line(&mut line)? == 0 {
                    writeln!(self.output)?;
                    writeln!(self.output, "History: {}", game)?;
                    info!("Input closed");
                    return Ok(SessionEnd::InputClosed(game));
                }

                let played = grid_to_square(&normalize_grid(&line))
                    .map_err(|e| e.to_string())
                    .and_then(|square| game.make_move(square).map_err(|e| e.to_string()));
                match played {
                    Ok(()) => break,
                    Err(reason) => {
                        remaining -= 1;
                        writeln!(self.output, "Invalid move: {} ({} left)", reason, remaining)?;
                    }
                }
            }
        }
    }
}

/// Final announcement for a finished game.
pub fn game_over_message(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won(player) => format!("Game over: {} wins!", player),
        Outcome::Draw => "Game over: draw.".to_string(),
        Outcome::InProgress => "Game in progress.".to_string(),
    }
}
