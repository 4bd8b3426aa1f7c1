//! Per-piece movement rules: geometry, blocking and capture legality.
//!
//! These rules ignore whether the mover's own king ends up attacked; that is
//! the job of [`legality`](crate::legality). Validation ([`plan`]) is pure and
//! only [`try_move`] touches the board, so a rejected move never changes it.

mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::debug;

use crate::board::Board;
use crate::chess_move::{Move, PromotionPiece};
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

pub(crate) use self::pawns::attacks as pawn_attacks;

/// The board update a validated move will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovePlan {
    /// Move (or capture with) the piece on `from` to `to`.
    Step { from: Position, to: Position },
    /// A pawn reaches the last rank and is replaced on `to`.
    Promotion { from: Position, to: Position },
    /// King and rook move together.
    Castle {
        king_from: Position,
        king_to: Position,
        rook_from: Position,
        rook_to: Position,
    },
}

impl MovePlan {
    /// Every square the plan writes to.
    pub fn touched(self) -> impl Iterator<Item = Position> {
        let (squares, len) = match self {
            MovePlan::Step { from, to } | MovePlan::Promotion { from, to } => {
                ([from, to, from, to], 2)
            }
            MovePlan::Castle {
                king_from,
                king_to,
                rook_from,
                rook_to,
            } => ([king_from, king_to, rook_from, rook_to], 4),
        };
        squares.into_iter().take(len)
    }
}

/// Validate a move against the moving piece's rules without touching the board.
pub fn plan(board: &Board, from: Position, to: Position) -> Result<MovePlan, MoveError> {
    if from == to {
        return Err(MoveError::NullMove);
    }
    let piece = board.get(from).ok_or(MoveError::NoPiece)?;
    if let Some(target) = board.get(to)
        && target.color() == piece.color()
    {
        return Err(MoveError::SelfCapture);
    }

    match piece.kind() {
        PieceKind::Pawn => pawns::plan(board, piece.color(), from, to),
        PieceKind::Knight => knights::plan(from, to),
        PieceKind::Bishop => sliders::plan_bishop(board, from, to),
        PieceKind::Rook => sliders::plan_rook(board, from, to),
        PieceKind::Queen => sliders::plan_queen(board, from, to),
        PieceKind::King => king::plan(board, piece, from, to),
    }
}

/// Validate `mv` and, if it is pseudo-legal, perform it.
///
/// Castling is requested as the king's two-square move. A pawn reaching the
/// last rank needs `mv.promotion`; any other move must not carry one.
pub fn try_move(board: &mut Board, mv: Move) -> Result<MovePlan, MoveError> {
    let plan = plan(board, mv.from, mv.to)?;
    match (plan, mv.promotion) {
        (MovePlan::Promotion { .. }, None) => return Err(MoveError::PromotionRequired),
        (MovePlan::Promotion { .. }, Some(_)) => {}
        (_, Some(_)) => return Err(MoveError::UnexpectedPromotion),
        (_, None) => {}
    }

    apply(board, plan, mv.promotion);
    debug!(mv = %mv, ?plan, "move applied");
    Ok(plan)
}

/// Write a validated plan to the board.
///
/// Legality probes pass `None` for promotions; the promoted kind cannot
/// change whether the mover's king is attacked, so a queen stands in.
pub(crate) fn apply(board: &mut Board, plan: MovePlan, promotion: Option<PromotionPiece>) {
    match plan {
        MovePlan::Step { from, to } => {
            if let Some(piece) = board.take(from) {
                board.set(to, Some(piece.moved()));
            }
        }
        MovePlan::Promotion { from, to } => {
            if let Some(pawn) = board.take(from) {
                let kind = promotion.unwrap_or(PromotionPiece::Queen).to_piece_kind();
                board.set(to, Some(Piece::new(kind, pawn.color())));
            }
        }
        MovePlan::Castle {
            king_from,
            king_to,
            rook_from,
            rook_to,
        } => {
            let king = board.take(king_from);
            let rook = board.take(rook_from);
            board.set(king_to, king.map(Piece::moved));
            board.set(rook_to, rook.map(Piece::moved));
        }
    }
}

/// Squares strictly between two squares on a shared line or diagonal.
pub(crate) fn between(from: Position, to: Position) -> impl Iterator<Item = Position> {
    let (dr, dc) = from.delta(to);
    let steps = dr.unsigned_abs().max(dc.unsigned_abs()) as i8;
    let (sr, sc) = (dr.signum(), dc.signum());
    (1..steps).filter_map(move |i| from.offset(sr * i, sc * i))
}
