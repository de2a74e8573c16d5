//! Core domain types: players, cells and the board.

use crate::square::Square;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O (moves second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The player due to move after `moves_played` moves, ignoring outcome.
    pub fn for_turn(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Character drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Character drawn for this cell; a space when empty.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, indexed by [`Square::index`].
    cells: [Cell; 9],
}

const COLUMN_HEADER: &str = "    A   B   C\n";
const ROW_SEPARATOR: &str = "  +---+---+---+\n";

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given square.
    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.index()]
    }

    /// Marks a square. Validation is the caller's job.
    pub(crate) fn set(&mut self, square: Square, cell: Cell) {
        self.cells[square.index()] = cell;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Number of squares marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Renders the board as a fixed-width text grid.
    ///
    /// ```text
    ///     A   B   C
    ///   +---+---+---+
    /// 1 | X | O | X |
    ///   +---+---+---+
    /// 2 | X | X | O |
    ///   +---+---+---+
    /// 3 | O | X | O |
    ///   +---+---+---+
    /// ```
    ///
    /// Every line, including the last, ends with `\n`. The layout is stable
    /// byte for byte so callers can compare snapshots.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(128);
        out.push_str(COLUMN_HEADER);
        out.push_str(ROW_SEPARATOR);
        for (row, cells) in self.cells.chunks(3).enumerate() {
            out.push_str(&format!("{} |", row + 1));
            for cell in cells {
                out.push(' ');
                out.push(cell.symbol());
                out.push_str(" |");
            }
            out.push('\n');
            out.push_str(ROW_SEPARATOR);
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
