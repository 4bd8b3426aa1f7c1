//! A board plus turn order.

use tracing::debug;

use crate::board::Board;
use crate::check;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{BoardError, MoveError};
use crate::legality::{self, GameStatus};
use crate::position::Position;
use crate::rules::{self, MovePlan};

/// A game in progress: the board, the side to move and its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    status: GameStatus,
}

impl Game {
    /// Start a game from the standard position with White to move.
    pub fn new() -> Game {
        Game {
            board: Board::starting_position(),
            side_to_move: Color::White,
            status: GameStatus::Ongoing,
        }
    }

    /// Continue a game from an arbitrary position.
    ///
    /// The board must pass [`Board::validate`], and the side that is not on
    /// move must not be in check: its king could otherwise be captured.
    pub fn from_board(mut board: Board, side_to_move: Color) -> Result<Game, BoardError> {
        board.validate()?;
        let waiting = side_to_move.flip();
        if check::try_is_in_check(&board, waiting)? {
            return Err(BoardError::OpponentInCheck { color: waiting });
        }
        let status = legality::status(&mut board, side_to_move);
        Ok(Game {
            board,
            side_to_move,
            status,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Status of the side to move.
    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the side to move is in check.
    pub fn in_check(&self) -> bool {
        check::is_in_check(&self.board, self.side_to_move)
    }

    /// Legal destinations of the piece on `from`.
    pub fn legal_destinations(&mut self, from: Position) -> Vec<Position> {
        legality::legal_destinations(&mut self.board, from)
    }

    /// Play `mv` for the side to move.
    ///
    /// On success the turn passes and the new side to move's status is
    /// returned. On failure nothing changes; once the game is decided every
    /// move fails with [`MoveError::GameOver`].
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }
        let piece = self.board.get(mv.from).ok_or(MoveError::NoPiece)?;
        if piece.color() != self.side_to_move {
            return Err(MoveError::WrongTurn);
        }
        if let Err(e) = legality::check_legal(&mut self.board, mv.from, mv.to) {
            debug!(mv = %mv, reason = %e, "move rejected");
            return Err(e);
        }
        let plan = rules::try_move(&mut self.board, mv)?;
        if matches!(plan, MovePlan::Castle { .. }) {
            debug!(color = ?self.side_to_move, "castled");
        }

        self.side_to_move = self.side_to_move.flip();
        self.status = legality::status(&mut self.board, self.side_to_move);
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
