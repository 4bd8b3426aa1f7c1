//! King steps and castling.

use tracing::trace;

use crate::board::Board;
use crate::check;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::{MovePlan, between};

/// Column the king starts on.
const KING_HOME_COL: u8 = 4;

/// Validate a king move; a two-column sideways move is a castling request.
pub(super) fn plan(
    board: &Board,
    king: Piece,
    from: Position,
    to: Position,
) -> Result<MovePlan, MoveError> {
    let (dr, dc) = from.delta(to);
    if dr == 0 && dc.abs() == 2 {
        return plan_castle(board, king, from, to);
    }

    if from.chebyshev(to) != 1 {
        return Err(MoveError::IllegalGeometry);
    }
    if let Ok(enemy) = board.king_position(king.color().flip())
        && enemy.chebyshev(to) <= 1
    {
        return Err(MoveError::KingsAdjacent);
    }

    Ok(MovePlan::Step { from, to })
}

fn plan_castle(
    board: &Board,
    king: Piece,
    from: Position,
    to: Position,
) -> Result<MovePlan, MoveError> {
    let color = king.color();
    let home = color.home_row();
    if from != Position::from_coords(home, KING_HOME_COL) {
        return Err(MoveError::IllegalGeometry);
    }

    let king_side = to.col() > from.col();
    let (rook_col, rook_to_col) = if king_side { (7, 5) } else { (0, 3) };
    let rook_from = Position::from_coords(home, rook_col);
    let rook_to = Position::from_coords(home, rook_to_col);

    let rook_ready = matches!(
        board.get(rook_from),
        Some(rook) if rook.kind() == PieceKind::Rook && rook.color() == color && !rook.has_moved()
    );
    if king.has_moved() || !rook_ready {
        return Err(MoveError::CastlingRightsLost);
    }

    if between(from, rook_from).any(|pos| !board.is_empty(pos)) {
        return Err(MoveError::PathBlocked);
    }

    if check::is_attacked(board, from, color.flip()) {
        return Err(MoveError::CastlingOutOfCheck);
    }

    // Stand the king on each square it crosses and on its destination.
    let crossed = between(from, to).chain(std::iter::once(to));
    for square in crossed {
        let mut scratch = board.clone();
        scratch.set(from, None);
        scratch.set(square, Some(king));
        trace!(%square, "probing castling path");
        if check::is_attacked(&scratch, square, color.flip()) {
            return Err(MoveError::CastlingThroughCheck);
        }
    }

    Ok(MovePlan::Castle {
        king_from: from,
        king_to: to,
        rook_from,
        rook_to,
    })
}
