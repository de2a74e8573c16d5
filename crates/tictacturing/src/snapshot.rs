//! Serializable view of a game for callers that want structured output.

use crate::game::GameState;
use crate::outcome::Outcome;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Everything derivable from a history, flattened for display or JSON.
///
/// The snapshot is a read-only view. Only [`GameSnapshot::history`] is
/// authoritative; load it back with [`GameState::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Canonical history string.
    pub history: String,
    /// Board rows top to bottom, one symbol per cell (space when empty).
    pub rows: [String; 3],
    /// Player to move, absent once the game is over.
    pub current_player: Option<Player>,
    /// Outcome of the game so far.
    pub outcome: Outcome,
    /// Free squares as grid addresses.
    pub valid_moves: Vec<String>,
}

impl From<&GameState> for GameSnapshot {
    fn from(game: &GameState) -> Self {
        let cells = game.board().cells();
        let row = |r: usize| -> String {
            cells[r * 3..r * 3 + 3].iter().map(|c| c.symbol()).collect()
        };
        Self {
            history: game.serialize(),
            rows: [row(0), row(1), row(2)],
            current_player: game.current_player(),
            outcome: game.outcome(),
            valid_moves: game.valid_moves().into_iter().map(|s| s.grid()).collect(),
        }
    }
}
