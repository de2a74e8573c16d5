//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules are kept apart from the game state so
//! the invariants can re-evaluate a board independently of the cached
//! outcome.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};

use crate::outcome::Outcome;
use crate::types::Board;

/// Classifies a board after `moves_played` moves.
///
/// A completed line wins even when it fills the board.
pub fn evaluate(board: &Board, moves_played: usize) -> Outcome {
    if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if moves_played >= 9 {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
