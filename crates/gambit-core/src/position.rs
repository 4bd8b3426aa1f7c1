//! Board squares addressed by row and column.

use std::fmt;
use std::str::FromStr;

use crate::error::{BoardError, NotationError};

/// One of the 64 squares.
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1; column 0 is
/// file `a`. Both coordinates are always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a position, failing with [`BoardError::OutOfBounds`] off the board.
    pub fn new(row: i16, col: i16) -> Result<Position, BoardError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Position {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(BoardError::OutOfBounds { row, col })
        }
    }

    /// Create a position from coordinates already known to be in range.
    #[inline]
    pub(crate) const fn from_coords(row: u8, col: u8) -> Position {
        debug_assert!(row < 8 && col < 8);
        Position { row, col }
    }

    /// Parse square notation such as `"e2"`.
    pub fn from_notation(s: &str) -> Result<Position, NotationError> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(NotationError::InvalidLength {
                found: s.chars().count(),
            });
        };

        if !('a'..='h').contains(&file) {
            return Err(NotationError::InvalidFile { character: file });
        }
        if !('1'..='8').contains(&rank) {
            return Err(NotationError::InvalidRank { character: rank });
        }

        let col = file as u8 - b'a';
        let row = 8 - (rank as u8 - b'0');
        Ok(Position::from_coords(row, col))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Return the square `(dr, dc)` away, or `None` if that leaves the board.
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Position> {
        Position::new(self.row as i16 + dr as i16, self.col as i16 + dc as i16).ok()
    }

    /// Signed `(row, col)` delta from `self` to `other`.
    #[inline]
    pub const fn delta(self, other: Position) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// King-move distance between two squares.
    #[inline]
    pub const fn chebyshev(self, other: Position) -> u8 {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        if dr > dc { dr } else { dc }
    }

    /// Iterate over all 64 squares row-major, row 0 first.
    pub fn all() -> impl Iterator<Item = Position> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Position::from_coords(row, col)))
    }
}

impl FromStr for Position {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Position, NotationError> {
        Position::from_notation(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({self})")
    }
}
