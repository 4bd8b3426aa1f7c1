//! Error types for notation parsing, board access, and move validation.

use std::fmt;

use crate::color::Color;

/// Errors that occur when parsing square notation such as `"e2"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// The string is not exactly two characters long.
    InvalidLength {
        /// Number of characters found.
        found: usize,
    },
    /// The first character is not a file letter `a`-`h`.
    InvalidFile {
        /// The invalid character.
        character: char,
    },
    /// The second character is not a rank digit `1`-`8`.
    InvalidRank {
        /// The invalid character.
        character: char,
    },
    /// A move is not four or five characters once spaces are removed.
    InvalidMoveLength {
        /// Number of characters found.
        found: usize,
    },
    /// The promotion suffix is not one of `q`, `r`, `b`, `n`.
    InvalidPromotion {
        /// The invalid character.
        character: char,
    },
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::InvalidLength { found } => {
                write!(f, "expected 2 characters in square, found {found}")
            }
            NotationError::InvalidFile { character } => {
                write!(f, "invalid file: '{character}'")
            }
            NotationError::InvalidRank { character } => {
                write!(f, "invalid rank: '{character}'")
            }
            NotationError::InvalidMoveLength { found } => {
                write!(f, "expected a move like e2e4, found {found} characters")
            }
            NotationError::InvalidPromotion { character } => {
                write!(f, "invalid promotion piece: '{character}'")
            }
        }
    }
}

impl std::error::Error for NotationError {}

/// Errors that occur when parsing a piece-placement diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The diagram does not have exactly 8 `/`-separated rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    BadRowLength {
        /// Zero-based row index (0 = rank 8).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the diagram.
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongRowCount { found } => {
                write!(f, "expected 8 rows in placement, found {found}")
            }
            PlacementError::BadRowLength { row, length } => {
                write!(f, "row {row} describes {length} squares, expected 8")
            }
            PlacementError::InvalidPieceChar { character } => {
                write!(f, "invalid piece character: '{character}'")
            }
        }
    }
}

impl std::error::Error for PlacementError {}

/// Invariant breaches on the board itself. Not reachable through normal play.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A coordinate outside `0..8`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds {
        /// The requested row.
        row: i16,
        /// The requested column.
        col: i16,
    },
    /// No king of the given color is on the board.
    #[error("no {color:?} king on the board")]
    KingNotFound {
        /// The side whose king is missing.
        color: Color,
    },
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color:?}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns stand on the first or eighth rank.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The side that just moved has its king attacked.
    #[error("{color:?} is in check but it is not {color:?}'s turn")]
    OpponentInCheck {
        /// The side in check.
        color: Color,
    },
}

/// Why a move was rejected. The board is unchanged whenever one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Source and destination are the same square.
    #[error("source and destination are the same square")]
    NullMove,
    /// The source square is empty.
    #[error("no piece on the source square")]
    NoPiece,
    /// The piece belongs to the side not on move.
    #[error("it is not that piece's turn")]
    WrongTurn,
    /// The destination holds a piece of the mover's color.
    #[error("cannot capture your own piece")]
    SelfCapture,
    /// The piece cannot move in that pattern.
    #[error("the piece does not move that way")]
    IllegalGeometry,
    /// A piece stands between source and destination.
    #[error("the path is blocked")]
    PathBlocked,
    /// The king would stand next to the opposing king.
    #[error("kings cannot stand next to each other")]
    KingsAdjacent,
    /// The king or the castling rook has moved, or the rook is missing.
    #[error("castling is no longer available on that side")]
    CastlingRightsLost,
    /// Castling was attempted while in check.
    #[error("cannot castle out of check")]
    CastlingOutOfCheck,
    /// The king would cross or land on an attacked square.
    #[error("cannot castle through or into check")]
    CastlingThroughCheck,
    /// The move would leave the mover's own king attacked.
    #[error("the move leaves your king in check")]
    LeavesKingInCheck,
    /// A pawn reached the last rank without a promotion choice.
    #[error("a promotion piece must be chosen")]
    PromotionRequired,
    /// A promotion piece was given for a move that does not promote.
    #[error("only a pawn reaching the last rank can promote")]
    UnexpectedPromotion,
    /// The game already ended in checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
}
