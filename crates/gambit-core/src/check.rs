//! Attack and check detection.

use tracing::warn;

use crate::board::Board;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::rules;

/// Return `true` if the piece on `from` attacks `target`.
///
/// Pawns and kings use their capture patterns directly; the adjacency rule
/// only restricts where a king may *move*. The other pieces attack exactly
/// the squares they could move to, so their movement rules are asked instead.
/// Movement validation never tests for check here, so this cannot recurse.
pub fn attacks(board: &Board, from: Position, target: Position) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    match piece.kind() {
        PieceKind::Pawn => rules::pawn_attacks(piece.color(), from, target),
        PieceKind::King => from.chebyshev(target) == 1,
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            rules::plan(board, from, target).is_ok()
        }
    }
}

/// Return `true` if any piece of `by_color` attacks `target`.
pub fn is_attacked(board: &Board, target: Position, by_color: Color) -> bool {
    board
        .pieces(by_color)
        .any(|(from, _)| attacks(board, from, target))
}

/// Squares of the `color.flip()` pieces currently attacking `color`'s king.
pub fn checkers(board: &Board, color: Color) -> Result<Vec<Position>, BoardError> {
    let king = board.king_position(color)?;
    Ok(board
        .pieces(color.flip())
        .filter(|&(from, _)| attacks(board, from, king))
        .map(|(from, _)| from)
        .collect())
}

/// Return whether `color`'s king is attacked, or an error if it has no king.
pub fn try_is_in_check(board: &Board, color: Color) -> Result<bool, BoardError> {
    let king = board.king_position(color)?;
    Ok(is_attacked(board, king, color.flip()))
}

/// Return `true` if `color`'s king is attacked.
///
/// A board without that king counts as "not in check"; that state is never
/// reached through [`Game`](crate::Game) and is logged when it happens.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    match try_is_in_check(board, color) {
        Ok(in_check) => in_check,
        Err(e) => {
            warn!(error = %e, "check test on a board without a king");
            false
        }
    }
}
