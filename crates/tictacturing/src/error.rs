//! Error types for square parsing, live moves and history replay.

use crate::outcome::Outcome;
use crate::square::Square;

/// What was wrong with a grid address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GridFault {
    /// Not exactly two characters.
    #[display("must be 2 characters, got {}", _0)]
    Length(usize),
    /// Column outside `A`-`C`.
    #[display("column must be A-C, got {:?}", _0)]
    Column(char),
    /// Row outside `1`-`3`.
    #[display("row must be 1-3, got {:?}", _0)]
    Row(char),
}

/// A token that does not name one of the nine squares.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SquareError {
    /// Canonical label is not a single character in `A`-`I`.
    #[display("square must be a single letter A-I, got {:?}", _0)]
    InvalidSquareLabel(String),

    /// Grid address is malformed.
    #[display("invalid grid address {:?}: {}", token, fault)]
    InvalidGridAddress {
        /// The rejected input.
        token: String,
        /// The first fault found.
        fault: GridFault,
    },
}

impl std::error::Error for SquareError {}

/// A live move that was rejected. The state it was applied to is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has already reached a terminal outcome.
    #[display("game already finished ({})", _0)]
    GameAlreadyFinished(Outcome),

    /// The move token does not resolve to a square.
    #[display("invalid square {:?}", _0)]
    InvalidSquare(String),

    /// The target square already holds a mark.
    #[display("square {} already occupied", _0)]
    SquareOccupied(Square),
}

impl std::error::Error for MoveError {}

/// Why a history character was rejected during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryErrorKind {
    /// Character is not a label `A`-`I`.
    #[display("invalid square")]
    InvalidSquareLabel,
    /// Square was already played earlier in the history.
    #[display("square already occupied")]
    SquareOccupied,
    /// The game was already over before this move.
    #[display("move after game end")]
    MoveAfterGameEnd,
}

/// A persisted history string that cannot be replayed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("malformed history: {} {:?} at position {}", kind, character, position)]
pub struct HistoryError {
    /// The specific failure.
    pub kind: HistoryErrorKind,
    /// The offending character.
    pub character: char,
    /// Zero-based character position in the history string.
    pub position: usize,
}

impl HistoryError {
    /// Creates a history error for the character at `position`.
    pub fn new(kind: HistoryErrorKind, character: char, position: usize) -> Self {
        Self {
            kind,
            character,
            position,
        }
    }
}

impl std::error::Error for HistoryError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_messages_name_the_input() {
        let err = SquareError::InvalidGridAddress {
            token: "D4".to_string(),
            fault: GridFault::Column('D'),
        };
        assert_eq!(
            err.to_string(),
            "invalid grid address \"D4\": column must be A-C, got 'D'"
        );

        let err = HistoryError::new(HistoryErrorKind::SquareOccupied, 'A', 1);
        assert_eq!(
            err.to_string(),
            "malformed history: square already occupied 'A' at position 1"
        );

        let err = MoveError::GameAlreadyFinished(Outcome::Won(Player::X));
        assert_eq!(err.to_string(), "game already finished (X wins)");
    }
}
