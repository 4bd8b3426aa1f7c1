//! Chess rules: board representation, piece movement, check and game status.

mod board;
pub mod check;
mod chess_move;
mod color;
mod error;
mod game;
pub mod legality;
mod piece;
mod piece_kind;
mod placement;
mod position;
pub mod rules;

pub use board::{Board, EMPTY_SYMBOL, PrettyBoard};
pub use chess_move::{Move, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, MoveError, NotationError, PlacementError};
pub use game::Game;
pub use legality::GameStatus;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use position::Position;
