//! Moves as entered by a player: source, destination, optional promotion.

use std::fmt;
use std::str::FromStr;

use crate::error::NotationError;
use crate::piece_kind::PieceKind;
use crate::position::Position;

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromotionPiece {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl PromotionPiece {
    /// All promotion pieces.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Parse `q`, `r`, `b` or `n` (case-insensitive). Anything else is `None`.
    pub fn from_char(c: char) -> Option<PromotionPiece> {
        match c.to_ascii_lowercase() {
            'n' => Some(PromotionPiece::Knight),
            'b' => Some(PromotionPiece::Bishop),
            'r' => Some(PromotionPiece::Rook),
            'q' => Some(PromotionPiece::Queen),
            _ => None,
        }
    }

    /// Lowercase letter used in move notation.
    pub const fn notation_char(self) -> char {
        match self {
            PromotionPiece::Knight => 'n',
            PromotionPiece::Bishop => 'b',
            PromotionPiece::Rook => 'r',
            PromotionPiece::Queen => 'q',
        }
    }
}

/// A requested move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    /// Required when a pawn reaches the last rank, rejected otherwise.
    pub promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a move without a promotion choice.
    pub const fn new(from: Position, to: Position) -> Move {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    /// Create a promoting pawn move.
    pub const fn with_promotion(from: Position, to: Position, promo: PromotionPiece) -> Move {
        Move {
            from,
            to,
            promotion: Some(promo),
        }
    }

    /// Parse `e2e4`, `e2 e4` or `e7e8q`.
    pub fn from_notation(s: &str) -> Result<Move, NotationError> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if !(4..=5).contains(&chars.len()) {
            return Err(NotationError::InvalidMoveLength { found: chars.len() });
        }

        let square = |pair: &[char]| Position::from_notation(&pair.iter().collect::<String>());
        let from = square(&chars[0..2])?;
        let to = square(&chars[2..4])?;
        let promotion = match chars.get(4).copied() {
            None => None,
            Some(c) => Some(
                PromotionPiece::from_char(c)
                    .ok_or(NotationError::InvalidPromotion { character: c })?,
            ),
        };

        Ok(Move { from, to, promotion })
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Move, NotationError> {
        Move::from_notation(s)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.notation_char())?;
        }
        Ok(())
    }
}
