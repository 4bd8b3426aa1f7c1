//! Knight jumps.

use crate::error::MoveError;
use crate::position::Position;

use super::MovePlan;

/// Validate a knight move. Knights ignore blocking pieces.
pub(super) fn plan(from: Position, to: Position) -> Result<MovePlan, MoveError> {
    let (dr, dc) = from.delta(to);
    match (dr.abs(), dc.abs()) {
        (1, 2) | (2, 1) => Ok(MovePlan::Step { from, to }),
        _ => Err(MoveError::IllegalGeometry),
    }
}
