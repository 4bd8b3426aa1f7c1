//! Pawn pushes, captures and promotion.

use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::position::Position;

use super::MovePlan;

/// Validate a pawn move. Promotion is decided by the destination row.
pub(super) fn plan(
    board: &Board,
    color: Color,
    from: Position,
    to: Position,
) -> Result<MovePlan, MoveError> {
    let forward = color.forward();
    let (dr, dc) = from.delta(to);

    if dc == 0 && dr == forward {
        // Pawns never capture straight ahead.
        if !board.is_empty(to) {
            return Err(MoveError::PathBlocked);
        }
    } else if dc == 0 && dr == 2 * forward {
        if from.row() != color.pawn_row() {
            return Err(MoveError::IllegalGeometry);
        }
        let crossed = from.offset(forward, 0).ok_or(MoveError::IllegalGeometry)?;
        if !board.is_empty(crossed) || !board.is_empty(to) {
            return Err(MoveError::PathBlocked);
        }
    } else if dc.abs() == 1 && dr == forward {
        match board.get(to) {
            Some(target) if target.color() != color => {}
            _ => return Err(MoveError::IllegalGeometry),
        }
    } else {
        return Err(MoveError::IllegalGeometry);
    }

    if to.row() == color.promotion_row() {
        Ok(MovePlan::Promotion { from, to })
    } else {
        Ok(MovePlan::Step { from, to })
    }
}

/// Whether a `color` pawn on `from` attacks `target` (one step diagonally forward).
pub(crate) fn attacks(color: Color, from: Position, target: Position) -> bool {
    let (dr, dc) = from.delta(target);
    dr == color.forward() && dc.abs() == 1
}

#[cfg(test)]
mod tests {
    use super::{attacks, plan};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::position::Position;
    use crate::rules::MovePlan;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn single_and_double_push() {
        let board = Board::starting_position();
        assert!(plan(&board, Color::White, sq("e2"), sq("e3")).is_ok());
        assert!(plan(&board, Color::White, sq("e2"), sq("e4")).is_ok());
        assert!(plan(&board, Color::Black, sq("d7"), sq("d6")).is_ok());
        assert!(plan(&board, Color::Black, sq("d7"), sq("d5")).is_ok());
    }

    #[test]
    fn no_backwards_or_sideways() {
        let board = Board::from_placement("4k3/8/8/8/4P3/8/8/4K3").unwrap();
        assert_eq!(
            plan(&board, Color::White, sq("e4"), sq("e3")),
            Err(MoveError::IllegalGeometry)
        );
        assert_eq!(
            plan(&board, Color::White, sq("e4"), sq("f4")),
            Err(MoveError::IllegalGeometry)
        );
        assert_eq!(
            plan(&board, Color::White, sq("e4"), sq("e6")),
            Err(MoveError::IllegalGeometry)
        );
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let board = Board::from_placement("4k3/8/8/8/8/4n3/4P3/4K3").unwrap();
        assert_eq!(
            plan(&board, Color::White, sq("e2"), sq("e4")),
            Err(MoveError::PathBlocked)
        );
        assert_eq!(
            plan(&board, Color::White, sq("e2"), sq("e3")),
            Err(MoveError::PathBlocked)
        );

        let board = Board::from_placement("4k3/8/8/8/4n3/8/4P3/4K3").unwrap();
        assert_eq!(
            plan(&board, Color::White, sq("e2"), sq("e4")),
            Err(MoveError::PathBlocked)
        );
    }

    #[test]
    fn diagonal_only_captures() {
        let board = Board::from_placement("4k3/8/8/3p4/4P3/8/8/4K3").unwrap();
        assert!(plan(&board, Color::White, sq("e4"), sq("d5")).is_ok());
        assert_eq!(
            plan(&board, Color::White, sq("e4"), sq("f5")),
            Err(MoveError::IllegalGeometry)
        );
        assert!(plan(&board, Color::Black, sq("d5"), sq("e4")).is_ok());
    }

    #[test]
    fn last_rank_promotes() {
        let board = Board::from_placement("1n2k3/P7/8/8/8/8/7p/4K3").unwrap();
        assert_eq!(
            plan(&board, Color::White, sq("a7"), sq("a8")),
            Ok(MovePlan::Promotion { from: sq("a7"), to: sq("a8") })
        );
        assert_eq!(
            plan(&board, Color::White, sq("a7"), sq("b8")),
            Ok(MovePlan::Promotion { from: sq("a7"), to: sq("b8") })
        );
        assert_eq!(
            plan(&board, Color::Black, sq("h2"), sq("h1")),
            Ok(MovePlan::Promotion { from: sq("h2"), to: sq("h1") })
        );
    }

    #[test]
    fn attack_pattern() {
        assert!(attacks(Color::White, sq("e4"), sq("d5")));
        assert!(attacks(Color::White, sq("e4"), sq("f5")));
        assert!(!attacks(Color::White, sq("e4"), sq("e5")));
        assert!(!attacks(Color::White, sq("e4"), sq("d3")));
        assert!(attacks(Color::Black, sq("e5"), sq("d4")));
    }
}
