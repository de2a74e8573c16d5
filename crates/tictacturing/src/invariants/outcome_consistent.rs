//! Outcome consistency invariant: the cached outcome matches the rules.

use super::Invariant;
use crate::{GameState, Outcome, Player, evaluate, is_full};

/// Invariant: The stored outcome is what the rules say about the board.
///
/// A draw additionally requires a full board, and a winner must be the
/// player who made the last move.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let outcome = game.outcome();
        if outcome == Outcome::Draw && !is_full(game.board()) {
            return false;
        }
        if let Some(winner) = outcome.winner() {
            let last_mover = Player::for_turn(game.history().len()).opponent();
            if winner != last_mover {
                return false;
            }
        }
        outcome == evaluate(game.board(), game.history().len())
    }

    fn description() -> &'static str {
        "Outcome matches board"
    }
}
