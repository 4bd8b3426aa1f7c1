//! Bishop, rook and queen slides.

use crate::board::Board;
use crate::error::MoveError;
use crate::position::Position;

use super::{MovePlan, between};

fn is_diagonal(from: Position, to: Position) -> bool {
    let (dr, dc) = from.delta(to);
    dr != 0 && dr.abs() == dc.abs()
}

fn is_straight(from: Position, to: Position) -> bool {
    let (dr, dc) = from.delta(to);
    (dr == 0) != (dc == 0)
}

fn slide(board: &Board, from: Position, to: Position) -> Result<MovePlan, MoveError> {
    if between(from, to).any(|pos| !board.is_empty(pos)) {
        return Err(MoveError::PathBlocked);
    }
    Ok(MovePlan::Step { from, to })
}

pub(super) fn plan_bishop(board: &Board, from: Position, to: Position) -> Result<MovePlan, MoveError> {
    if !is_diagonal(from, to) {
        return Err(MoveError::IllegalGeometry);
    }
    slide(board, from, to)
}

pub(super) fn plan_rook(board: &Board, from: Position, to: Position) -> Result<MovePlan, MoveError> {
    if !is_straight(from, to) {
        return Err(MoveError::IllegalGeometry);
    }
    slide(board, from, to)
}

pub(super) fn plan_queen(board: &Board, from: Position, to: Position) -> Result<MovePlan, MoveError> {
    if !is_straight(from, to) && !is_diagonal(from, to) {
        return Err(MoveError::IllegalGeometry);
    }
    slide(board, from, to)
}
