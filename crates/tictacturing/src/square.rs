//! Board squares and the two notations used to name them.
//!
//! Squares are stored by canonical label (`A`-`I`, row-major) and typed by
//! players as grid addresses (column `A`-`C` then row `1`-`3`).

use crate::error::{GridFault, SquareError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine squares, named by its canonical label.
///
/// ```text
/// A B C
/// D E F
/// G H I
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Square {
    /// Column A, row 1.
    A,
    /// Column B, row 1.
    B,
    /// Column C, row 1.
    C,
    /// Column A, row 2.
    D,
    /// Column B, row 2 (center).
    E,
    /// Column C, row 2.
    F,
    /// Column A, row 3.
    G,
    /// Column B, row 3.
    H,
    /// Column C, row 3.
    I,
}

const LABELS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];
const COLUMNS: [char; 3] = ['A', 'B', 'C'];
const ROWS: [char; 3] = ['1', '2', '3'];

impl Square {
    /// All nine squares in row-major order.
    pub const ALL: [Square; 9] = [
        Square::A,
        Square::B,
        Square::C,
        Square::D,
        Square::E,
        Square::F,
        Square::G,
        Square::H,
        Square::I,
    ];

    /// Board index (0-8), row-major.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Square at the given board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical label (`A`-`I`).
    pub fn label(self) -> char {
        LABELS[self.index()]
    }

    /// Resolves a canonical label character.
    pub fn from_label(label: char) -> Option<Self> {
        LABELS
            .iter()
            .position(|&c| c == label)
            .and_then(Self::from_index)
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Grid address, e.g. `"B2"` for [`Square::E`].
    pub fn grid(self) -> String {
        let mut addr = String::with_capacity(2);
        addr.push(COLUMNS[self.column()]);
        addr.push(ROWS[self.row()]);
        addr
    }

    /// Parses a one-character canonical label token.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::InvalidSquareLabel`] unless the token is exactly
    /// one character in `A`-`I`.
    #[instrument]
    pub fn parse_label(token: &str) -> Result<Self, SquareError> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Self::from_label(c).ok_or_else(|| SquareError::InvalidSquareLabel(token.to_string()))
            }
            _ => Err(SquareError::InvalidSquareLabel(token.to_string())),
        }
    }

    /// Parses a grid address such as `"B2"`.
    ///
    /// Input must already be uppercase; case folding belongs to the caller.
    ///
    /// # Errors
    ///
    /// Returns [`SquareError::InvalidGridAddress`] naming the first fault
    /// found: length, then column, then row.
    #[instrument]
    pub fn from_grid(addr: &str) -> Result<Self, SquareError> {
        let fail = |fault| SquareError::InvalidGridAddress {
            token: addr.to_string(),
            fault,
        };

        let chars: Vec<char> = addr.chars().collect();
        let [col, row] = chars.as_slice() else {
            return Err(fail(GridFault::Length(chars.len())));
        };

        let col = COLUMNS
            .iter()
            .position(|c| c == col)
            .ok_or_else(|| fail(GridFault::Column(*col)))?;
        let row = ROWS
            .iter()
            .position(|r| r == row)
            .ok_or_else(|| fail(GridFault::Row(*row)))?;

        Ok(Self::ALL[row * 3 + col])
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_label(s)
    }
}

/// Converts a grid address (`"B2"`) to its square.
///
/// # Errors
///
/// See [`Square::from_grid`].
pub fn grid_to_square(addr: &str) -> Result<Square, SquareError> {
    Square::from_grid(addr)
}

/// Converts a canonical label (`"E"`) to its grid address (`"B2"`).
///
/// # Errors
///
/// See [`Square::parse_label`].
pub fn square_to_grid(label: &str) -> Result<String, SquareError> {
    Square::parse_label(label).map(Square::grid)
}
