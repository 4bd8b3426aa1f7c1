//! Colored chess piece with its castling-relevant state.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A piece on the board.
///
/// A piece does not know its square; that is implied by its slot in the
/// [`Board`](crate::Board). `has_moved` is only ever set for rooks and kings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    has_moved: bool,
}

impl Piece {
    /// Create an unmoved piece.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Parse a placement character: uppercase is White, lowercase is Black.
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color))
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Whether this rook or king has moved since setup.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.has_moved
    }

    /// Return this piece after it has made a move.
    ///
    /// Only rooks and kings keep the flag; other kinds come back unchanged.
    #[inline]
    pub const fn moved(self) -> Piece {
        Piece {
            has_moved: self.has_moved || self.kind.tracks_moves(),
            ..self
        }
    }

    /// Two-character symbol used by renderers, e.g. `wP` or `bK`.
    pub fn symbol(self) -> String {
        self.to_string()
    }

    /// Placement character: uppercase for White, lowercase for Black.
    pub fn placement_char(self) -> char {
        let c = self.kind.symbol();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.color, self.kind)
    }
}
