//! The chess board: an 8x8 grid of optional pieces.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// Placeholder rendered for an empty square.
pub const EMPTY_SYMBOL: &str = "--";

/// Piece placement. Pure storage: no notion of turn or legality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Indexed `[row][col]`, row 0 = rank 8.
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Return an empty board.
    pub const fn new() -> Board {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Return a board set up in the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::new();
        board.setup();
        board
    }

    /// Clear the grid and place the standard starting position.
    pub fn setup(&mut self) {
        *self = Board::new();
        for color in Color::ALL {
            let home = color.home_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                self.squares[home][col] = Some(Piece::new(kind, color));
                self.squares[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
    }

    /// Return the piece on `pos`, if any.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        self.squares[pos.row() as usize][pos.col() as usize]
    }

    /// Put `piece` on `pos`, replacing whatever was there.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        self.squares[pos.row() as usize][pos.col() as usize] = piece;
    }

    /// Remove and return the piece on `pos`.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Option<Piece> {
        self.squares[pos.row() as usize][pos.col() as usize].take()
    }

    /// Return `true` if no piece stands on `pos`.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Iterate over every piece of `color` with its square, row-major.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all().filter_map(move |pos| match self.get(pos) {
            Some(piece) if piece.color() == color => Some((pos, piece)),
            _ => None,
        })
    }

    /// Row-major view of the grid, row 0 (rank 8) first.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Return the square of `color`'s king.
    pub fn king_position(&self, color: Color) -> Result<Position, BoardError> {
        self.pieces(color)
            .find(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(pos, _)| pos)
            .ok_or(BoardError::KingNotFound { color })
    }

    /// Validate that the position could arise in a game.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let back_ranks = [0usize, 7];
        let pawn_on_back_rank = back_ranks.iter().any(|&row| {
            self.squares[row]
                .iter()
                .flatten()
                .any(|piece| piece.kind() == PieceKind::Pawn)
        });
        if pawn_on_back_rank {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self.placement())
    }
}

/// Wrapper for printing the board as a grid of two-character symbols.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, squares) in self.0.rows().iter().enumerate() {
            write!(f, "{}  ", 8 - row)?;
            for (col, square) in squares.iter().enumerate() {
                match square {
                    Some(piece) => write!(f, "{piece}")?,
                    None => write!(f, "{EMPTY_SYMBOL}")?,
                }
                if col < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a  b  c  d  e  f  g  h")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::color::Color;
    use crate::error::BoardError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.get(sq("e1")), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board.get(sq("d8")), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(board.get(sq("a1")), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.get(sq("g8")), Some(Piece::new(PieceKind::Knight, Color::Black)));
        assert_eq!(board.get(sq("c1")), Some(Piece::new(PieceKind::Bishop, Color::White)));
        assert_eq!(board.get(sq("e2")), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.get(sq("h7")), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(board.is_empty(sq("e4")));
    }

    #[test]
    fn sixteen_pieces_per_side() {
        let board = Board::starting_position();
        assert_eq!(board.pieces(Color::White).count(), 16);
        assert_eq!(board.pieces(Color::Black).count(), 16);
    }

    #[test]
    fn setup_is_idempotent() {
        let mut board = Board::starting_position();
        board.set(sq("e4"), board.get(sq("e2")));
        board.set(sq("e2"), None);
        board.setup();
        let first = board.clone();
        board.setup();
        assert_eq!(board, first);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn set_take_and_is_empty() {
        let mut board = Board::new();
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        assert!(board.is_empty(sq("d4")));
        board.set(sq("d4"), Some(rook));
        assert!(!board.is_empty(sq("d4")));
        assert_eq!(board.take(sq("d4")), Some(rook));
        assert!(board.is_empty(sq("d4")));
    }

    #[test]
    fn king_position() {
        let board = Board::starting_position();
        assert_eq!(board.king_position(Color::White), Ok(sq("e1")));
        assert_eq!(board.king_position(Color::Black), Ok(sq("e8")));
        assert_eq!(
            Board::new().king_position(Color::White),
            Err(BoardError::KingNotFound { color: Color::White })
        );
    }

    #[test]
    fn validate_rejects_missing_king_and_back_rank_pawns() {
        let mut board = Board::starting_position();
        board.set(sq("e8"), None);
        assert_eq!(
            board.validate(),
            Err(BoardError::InvalidKingCount { color: Color::Black, count: 0 })
        );

        let mut board = Board::starting_position();
        board.set(sq("b8"), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.validate(), Err(BoardError::PawnsOnBackRank));
    }

    #[test]
    fn pretty_print() {
        let output = format!("{}", Board::starting_position().pretty());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "8  bR bN bB bQ bK bB bN bR");
        assert_eq!(lines[1], "7  bP bP bP bP bP bP bP bP");
        assert_eq!(lines[2], "6  -- -- -- -- -- -- -- --");
        assert_eq!(lines[7], "1  wR wN wB wQ wK wB wN wR");
        assert_eq!(lines[8], "   a  b  c  d  e  f  g  h");
    }
}
