//! The game state machine.
//!
//! A [`GameState`] is defined by its history. The board and outcome are
//! derived by replaying that history and kept as a cache that is recomputed
//! on every move.

use crate::error::{HistoryError, HistoryErrorKind, MoveError};
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::outcome::Outcome;
use crate::rules;
use crate::square::Square;
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Complete game state.
///
/// Serializes (with serde) as its history string and deserializes by
/// replaying it, so a corrupt stored value is rejected on load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GameState {
    board: Board,
    history: Vec<Square>,
    outcome: Outcome,
}

impl GameState {
    /// Creates an empty game with X to move.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a game by replaying a history string.
    ///
    /// Each character is checked exactly as a live move would be: it must be
    /// a label `A`-`I`, the square must be free, and the game must not be
    /// over yet.
    ///
    /// # Errors
    ///
    /// Returns a [`HistoryError`] carrying the offending character and its
    /// zero-based position.
    #[instrument(fields(len = text.len()))]
    pub fn parse(text: &str) -> Result<Self, HistoryError> {
        let mut state = Self::new();

        for (position, character) in text.chars().enumerate() {
            let fail = |kind: HistoryErrorKind| {
                warn!(%kind, %character, position, "Rejecting history");
                HistoryError::new(kind, character, position)
            };

            let square = Square::from_label(character)
                .ok_or_else(|| fail(HistoryErrorKind::InvalidSquareLabel))?;
            if !state.board.is_empty(square) {
                return Err(fail(HistoryErrorKind::SquareOccupied));
            }
            let Some(player) = state.current_player() else {
                return Err(fail(HistoryErrorKind::MoveAfterGameEnd));
            };

            state.place(square, player);
        }

        debug!(history = %state, outcome = %state.outcome, "Replayed history");
        Ok(state)
    }

    /// The canonical history string, one label per move in play order.
    pub fn serialize(&self) -> String {
        self.history.iter().map(|s| s.label()).collect()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the squares played, in order.
    pub fn history(&self) -> &[Square] {
        &self.history
    }

    /// Returns the outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// The player to move, or `None` once the game is over.
    pub fn current_player(&self) -> Option<Player> {
        if self.outcome.is_terminal() {
            None
        } else {
            Some(Player::for_turn(self.history.len()))
        }
    }

    /// Unmarked squares in row-major order; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Square> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }
        Square::iter().filter(|s| self.board.is_empty(*s)).collect()
    }

    /// Returns the state after playing `square`, leaving `self` untouched.
    ///
    /// # Errors
    ///
    /// See [`GameState::make_move`].
    pub fn apply_move(&self, square: Square) -> Result<Self, MoveError> {
        let mut next = self.clone();
        next.make_move(square)?;
        Ok(next)
    }

    /// Like [`GameState::apply_move`] but takes a canonical label token.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameAlreadyFinished`] takes precedence over
    /// [`MoveError::InvalidSquare`], which takes precedence over
    /// [`MoveError::SquareOccupied`].
    #[instrument(skip(self), fields(history = %self))]
    pub fn apply_label(&self, token: &str) -> Result<Self, MoveError> {
        self.ensure_in_progress()?;
        let square = Square::parse_label(token).map_err(|_| {
            warn!(token, "Rejecting unknown square");
            MoveError::InvalidSquare(token.to_string())
        })?;
        self.apply_move(square)
    }

    /// Plays `square` for the current player in place.
    ///
    /// All checks run before anything is written, so a rejected move leaves
    /// the state exactly as it was.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameAlreadyFinished`] once the outcome is terminal,
    /// [`MoveError::SquareOccupied`] if the square is marked.
    #[instrument(skip(self), fields(history = %self))]
    pub fn make_move(&mut self, square: Square) -> Result<(), MoveError> {
        let player = self.ensure_in_progress()?;
        if !self.board.is_empty(square) {
            warn!("Rejecting move to occupied square");
            return Err(MoveError::SquareOccupied(square));
        }

        self.place(square, player);

        debug_assert!(
            self.check_invariants().is_ok(),
            "invariants violated after move: {:?}",
            self.check_invariants()
        );

        debug!(%player, outcome = %self.outcome, "Move applied");
        Ok(())
    }

    /// Renders the board; see [`Board::render`].
    pub fn render_board(&self) -> String {
        self.board.render()
    }

    /// One-line human summary: whose move it is, or the result.
    pub fn status_line(&self) -> String {
        match (self.outcome, self.current_player()) {
            (Outcome::InProgress, Some(player)) => {
                format!("{} to move ({} played)", player, self.history.len())
            }
            (Outcome::Won(player), _) => format!("{} wins in {} moves", player, self.history.len()),
            _ => "Draw".to_string(),
        }
    }

    /// Checks every game invariant against this state.
    ///
    /// # Errors
    ///
    /// Returns each violated invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        GameInvariants::check_all(self)
    }

    fn ensure_in_progress(&self) -> Result<Player, MoveError> {
        self.current_player().ok_or_else(|| {
            warn!(outcome = %self.outcome, "Rejecting move after game end");
            MoveError::GameAlreadyFinished(self.outcome)
        })
    }

    /// Writes a validated move and recomputes the cached outcome.
    fn place(&mut self, square: Square, player: Player) {
        self.board.set(square, Cell::Occupied(player));
        self.history.push(square);
        self.outcome = rules::evaluate(&self.board, self.history.len());
    }

    #[cfg(test)]
    pub(crate) fn corrupt(&mut self, square: Square, cell: Cell) {
        self.board.set(square, cell);
    }

    #[cfg(test)]
    pub(crate) fn corrupt_outcome(&mut self, outcome: Outcome) {
        self.outcome = outcome;
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl std::str::FromStr for GameState {
    type Err = HistoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for GameState {
    type Error = HistoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<GameState> for String {
    fn from(state: GameState) -> Self {
        state.serialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(history: &str) -> GameState {
        GameState::parse(history).expect("valid history")
    }

    #[test]
    fn test_parse_empty() {
        let game = play("");
        assert!(game.history().is_empty());
        assert_eq!(game.current_player(), Some(Player::X));
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game, GameState::new());
    }

    #[test]
    fn test_apply_after_parse() {
        let game = play("A").apply_move(Square::B).unwrap();
        assert_eq!(game.serialize(), "AB");
        assert_eq!(game.current_player(), Some(Player::X));
    }

    #[test]
    fn test_column_win_then_finished() {
        let mut game = play("AB");
        for square in [Square::D, Square::E, Square::G] {
            game = game.apply_move(square).unwrap();
        }
        assert_eq!(game.serialize(), "ABDEG");
        assert_eq!(game.outcome(), Outcome::Won(Player::X));
        assert_eq!(game.current_player(), None);
        assert_eq!(
            game.apply_move(Square::C),
            Err(MoveError::GameAlreadyFinished(Outcome::Won(Player::X)))
        );
    }

    #[test]
    fn test_draw_board() {
        let game = play("ABCFDGEIH");
        assert_eq!(game.outcome(), Outcome::Draw);
        assert!(game.valid_moves().is_empty());
        let expected = concat!(
            "    A   B   C\n",
            "  +---+---+---+\n",
            "1 | X | O | X |\n",
            "  +---+---+---+\n",
            "2 | X | X | O |\n",
            "  +---+---+---+\n",
            "3 | O | X | O |\n",
            "  +---+---+---+\n",
        );
        assert_eq!(game.render_board(), expected);
    }

    #[test]
    fn test_parse_reports_position() {
        assert_eq!(
            GameState::parse("AA"),
            Err(HistoryError::new(HistoryErrorKind::SquareOccupied, 'A', 1))
        );
        assert_eq!(
            GameState::parse("ABZ"),
            Err(HistoryError::new(HistoryErrorKind::InvalidSquareLabel, 'Z', 2))
        );
        assert_eq!(
            GameState::parse("a"),
            Err(HistoryError::new(HistoryErrorKind::InvalidSquareLabel, 'a', 0))
        );
        assert_eq!(
            GameState::parse("ABDEGC"),
            Err(HistoryError::new(HistoryErrorKind::MoveAfterGameEnd, 'C', 5))
        );
    }

    #[test]
    fn test_occupied_square_reported_before_game_end() {
        // A was played and the game is over; occupancy is checked first.
        assert_eq!(
            GameState::parse("ABDEGA"),
            Err(HistoryError::new(HistoryErrorKind::SquareOccupied, 'A', 5))
        );
    }

    #[test]
    fn test_occupied_move_leaves_state_unchanged() {
        let mut game = play("AE");
        let before = game.clone();
        assert_eq!(game.make_move(Square::E), Err(MoveError::SquareOccupied(Square::E)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_apply_label_error_order() {
        let game = play("AE");
        assert_eq!(game.apply_label("C").unwrap().serialize(), "AEC");
        assert_eq!(game.apply_label("Q"), Err(MoveError::InvalidSquare("Q".to_string())));
        assert_eq!(game.apply_label("AB"), Err(MoveError::InvalidSquare("AB".to_string())));
        assert_eq!(game.apply_label("A"), Err(MoveError::SquareOccupied(Square::A)));

        let won = play("ABDEG");
        assert_eq!(
            won.apply_label("Q"),
            Err(MoveError::GameAlreadyFinished(Outcome::Won(Player::X)))
        );
    }

    #[test]
    fn test_valid_moves_are_occupancy_only() {
        let game = play("AE");
        let moves: String = game.valid_moves().iter().map(|s| s.label()).collect();
        assert_eq!(moves, "BCDFGHI");
    }

    #[test]
    fn test_status_line() {
        assert_eq!(play("").status_line(), "X to move (0 played)");
        assert_eq!(play("A").status_line(), "O to move (1 played)");
        assert_eq!(play("ABDEG").status_line(), "X wins in 5 moves");
        assert_eq!(play("ABCFDGEIH").status_line(), "Draw");
    }

    #[test]
    fn test_serde_as_history_string() {
        let game = play("EA");
        let json = serde_json::to_string(&game).unwrap();
        assert_eq!(json, "\"EA\"");
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, game);
        assert!(serde_json::from_str::<GameState>("\"EE\"").is_err());
    }

    #[test]
    fn test_from_str_and_display() {
        let game: GameState = "CEG".parse().unwrap();
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert_eq!(game.to_string(), "CEG");
    }
}
