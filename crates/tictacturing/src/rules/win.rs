//! Win detection logic for tic-tac-toe.

use crate::square::Square;
use crate::types::{Board, Cell, Player};

/// The eight winning lines.
pub const LINES: [[Square; 3]; 8] = [
    // Rows
    [Square::A, Square::B, Square::C],
    [Square::D, Square::E, Square::F],
    [Square::G, Square::H, Square::I],
    // Columns
    [Square::A, Square::D, Square::G],
    [Square::B, Square::E, Square::H],
    [Square::C, Square::F, Square::I],
    // Diagonals
    [Square::A, Square::E, Square::I],
    [Square::C, Square::E, Square::G],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match board.get(a) {
        Cell::Occupied(player) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
            Some(player)
        }
        _ => None,
    })
}
