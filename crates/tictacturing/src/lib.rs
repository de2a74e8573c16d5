//! Tic-tac-turing game engine.
//!
//! A pure, deterministic tic-tac-toe state machine. The canonical form of a
//! game is its move history: a string of square labels `A`-`I` in the order
//! played. Everything else (board, whose turn it is, the outcome) is derived
//! by replaying that history, so a state loaded from storage is always one
//! that live play could have produced.
//!
//! # Board labels
//!
//! ```text
//!     A   B   C           A   B   C
//! 1   A1  B1  C1      1   A   B   C
//! 2   A2  B2  C2      2   D   E   F
//! 3   A3  B3  C3      3   G   H   I
//! ```
//!
//! Grid addresses (`B2`) are what players type; square labels (`E`) are what
//! gets stored.
//!
//! # Example
//!
//! ```
//! use tictacturing::{GameState, Outcome, Player, grid_to_square};
//!
//! let game = GameState::parse("AB").unwrap();
//! let game = game.apply_move(grid_to_square("A2").unwrap()).unwrap();
//! assert_eq!(game.serialize(), "ABD");
//! assert_eq!(game.current_player(), Some(Player::O));
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod game;
mod invariants;
mod outcome;
mod rules;
mod snapshot;
mod square;
mod types;

pub use error::{GridFault, HistoryError, HistoryErrorKind, MoveError, SquareError};
pub use game::GameState;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, OutcomeConsistentInvariant,
};
pub use outcome::Outcome;
pub use rules::{LINES, check_winner, evaluate, is_full};
pub use snapshot::GameSnapshot;
pub use square::{Square, grid_to_square, square_to_grid};
pub use types::{Board, Cell, Player};
