//! Piece-placement diagrams (the first field of a FEN string).

use crate::board::Board;
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::position::Position;

/// Placement diagram of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl Board {
    /// Parse a placement diagram such as [`STARTING_PLACEMENT`].
    ///
    /// Rows run from rank 8 down to rank 1, digits are runs of empty squares,
    /// uppercase letters are White. Every piece starts unmoved.
    pub fn from_placement(s: &str) -> Result<Board, PlacementError> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for c in text.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece =
                        Piece::from_char(c).ok_or(PlacementError::InvalidPieceChar { character: c })?;
                    if col < 8 {
                        board.set(Position::from_coords(row as u8, col as u8), Some(piece));
                    }
                    col += 1;
                }
            }
            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        Ok(board)
    }

    /// Serialize the placement diagram of this board.
    pub fn placement(&self) -> String {
        let mut out = String::new();
        for (row, squares) in self.rows().iter().enumerate() {
            let mut empty = 0;
            for square in squares {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.placement_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < 7 {
                out.push('/');
            }
        }
        out
    }
}
