//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::{Board, Cell, GameState, Player};

/// Invariant: Replaying the history onto an empty board yields the board.
///
/// Also rejects a history that repeats a square or runs past nine moves.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        if game.history().len() > 9 {
            return false;
        }

        let mut replayed = Board::new();
        for (turn, square) in game.history().iter().enumerate() {
            if !replayed.is_empty(*square) {
                return false;
            }
            replayed.set(*square, Cell::Occupied(Player::for_turn(turn)));
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board matches replayed history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let game = GameState::parse("ABCFDGEIH").unwrap();
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::parse("AE").unwrap();
        game.corrupt(Square::E, Cell::Occupied(Player::X));
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_cleared_square_violates() {
        let mut game = GameState::parse("AE").unwrap();
        game.corrupt(Square::A, Cell::Empty);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
