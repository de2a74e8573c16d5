//! Alternating turn invariant: X moves first and players alternate.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: X has either as many marks as O or exactly one more.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let x = game.board().count(Player::X);
        let o = game.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
