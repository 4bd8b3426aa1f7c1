//! Legal-move filtering and terminal-state detection.
//!
//! A move is legal when the moving piece's rules allow it and it does not
//! leave the mover's own king attacked. Kings are never captured: a move that
//! would let the opponent take a king is filtered out here, one ply earlier.

use std::fmt;

use tracing::debug;

use crate::board::Board;
use crate::check;
use crate::color::Color;
use crate::error::MoveError;
use crate::piece::Piece;
use crate::position::Position;
use crate::rules::{self, MovePlan};

/// Temporarily applies a plan to the board and restores the touched squares on drop.
///
/// Only the squares the plan writes are saved (two for a step, four for
/// castling, `has_moved` flags included), and they are put back on every
/// exit path.
struct Probe<'a> {
    board: &'a mut Board,
    saved: [Option<(Position, Option<Piece>)>; 4],
}

impl<'a> Probe<'a> {
    fn apply(board: &'a mut Board, plan: MovePlan) -> Probe<'a> {
        let mut saved = [None; 4];
        for (slot, pos) in saved.iter_mut().zip(plan.touched()) {
            *slot = Some((pos, board.get(pos)));
        }
        rules::apply(board, plan, None);
        Probe { board, saved }
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for Probe<'_> {
    fn drop(&mut self) {
        for (pos, piece) in self.saved.iter().rev().flatten() {
            self.board.set(*pos, *piece);
        }
    }
}

/// Check whether moving the piece on `from` to `to` is legal.
///
/// The board is probed in place and is identical to its prior state when
/// this returns, whatever the outcome.
pub fn check_legal(board: &mut Board, from: Position, to: Position) -> Result<(), MoveError> {
    let plan = rules::plan(board, from, to)?;
    let color = board.get(from).ok_or(MoveError::NoPiece)?.color();

    let probe = Probe::apply(board, plan);
    if check::is_in_check(probe.board(), color) {
        debug!(%from, %to, "move rejected: own king left in check");
        return Err(MoveError::LeavesKingInCheck);
    }
    Ok(())
}

/// Return `true` if the move from `from` to `to` is legal.
pub fn is_legal(board: &mut Board, from: Position, to: Position) -> bool {
    check_legal(board, from, to).is_ok()
}

/// Every square the piece on `from` may legally move to.
pub fn legal_destinations(board: &mut Board, from: Position) -> Vec<Position> {
    Position::all()
        .filter(|&to| is_legal(board, from, to))
        .collect()
}

/// Return `true` if `color` has at least one legal move.
pub fn has_legal_moves(board: &mut Board, color: Color) -> bool {
    let sources: Vec<Position> = board.pieces(color).map(|(pos, _)| pos).collect();
    for from in sources {
        for to in Position::all() {
            if is_legal(board, from, to) {
                return true;
            }
        }
    }
    false
}

/// State of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with legal moves.
    Ongoing,
    /// In check, with legal moves.
    Check,
    /// In check, without legal moves.
    Checkmate,
    /// Not in check, without legal moves.
    Stalemate,
}

impl GameStatus {
    /// Whether the game has ended.
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Check => "check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        write!(f, "{text}")
    }
}

/// Classify the position for `color`, the side about to move.
pub fn status(board: &mut Board, color: Color) -> GameStatus {
    let in_check = check::is_in_check(board, color);
    let can_move = has_legal_moves(board, color);
    match (in_check, can_move) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::{GameStatus, check_legal, has_legal_moves, is_legal, legal_destinations, status};
    use crate::board::Board;
    use crate::check::is_in_check;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::position::Position;

    fn sq(s: &str) -> Position {
        s.parse().unwrap()
    }

    #[test]
    fn twenty_moves_from_the_start() {
        let mut board = Board::starting_position();
        let sources: Vec<Position> = board.pieces(Color::White).map(|(pos, _)| pos).collect();
        let count: usize = sources
            .into_iter()
            .map(|from| legal_destinations(&mut board, from).len())
            .sum();
        assert_eq!(count, 20);
        assert!(has_legal_moves(&mut board, Color::White));
        assert_eq!(status(&mut board, Color::White), GameStatus::Ongoing);
    }

    #[test]
    fn pinned_piece_cannot_move() {
        let mut board = Board::from_placement("4r1k1/8/8/8/8/8/4B3/4K3").unwrap();
        assert_eq!(
            check_legal(&mut board, sq("e2"), sq("d3")),
            Err(MoveError::LeavesKingInCheck)
        );
        assert!(is_legal(&mut board, sq("e1"), sq("d1")));
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = Board::from_placement("3r2k1/8/8/8/8/8/8/4K3").unwrap();
        assert_eq!(
            check_legal(&mut board, sq("e1"), sq("d2")),
            Err(MoveError::LeavesKingInCheck)
        );
        assert!(is_legal(&mut board, sq("e1"), sq("f2")));
    }

    #[test]
    fn king_cannot_capture_a_defended_piece() {
        let mut board = Board::from_placement("6k1/8/8/8/8/8/3r4/3rK3").unwrap();
        assert!(!is_legal(&mut board, sq("e1"), sq("d1")));
        assert!(!is_legal(&mut board, sq("e1"), sq("d2")));
    }

    #[test]
    fn probing_restores_the_board() {
        let start = Board::from_placement("r3k2r/pPp2ppp/8/3q4/8/8/P4PPP/R3K2R").unwrap();
        let mut board = start.clone();
        for from in Position::all() {
            for to in Position::all() {
                let _ = is_legal(&mut board, from, to);
                assert_eq!(board, start, "probing {from}{to} changed the board");
            }
        }
    }

    #[test]
    fn legal_moves_never_leave_the_king_in_check() {
        let start = Board::from_placement("r3k2r/pPp2ppp/8/3q4/1b6/8/P4PPP/R3K2R").unwrap();
        for from in Position::all() {
            let Some(piece) = start.get(from) else { continue };
            for to in Position::all() {
                let mut board = start.clone();
                if is_legal(&mut board, from, to) {
                    let mut after = start.clone();
                    crate::rules::apply(
                        &mut after,
                        crate::rules::plan(&start, from, to).unwrap(),
                        None,
                    );
                    assert!(!is_in_check(&after, piece.color()), "{from}{to}");
                }
            }
        }
    }

    #[test]
    fn back_rank_mate() {
        let mut board = Board::from_placement("R5k1/5ppp/8/8/8/8/8/6K1").unwrap();
        assert_eq!(status(&mut board, Color::Black), GameStatus::Checkmate);
        assert!(GameStatus::Checkmate.is_over());
    }

    #[test]
    fn check_with_an_escape() {
        let mut board = Board::from_placement("R5k1/5pp1/8/8/8/8/8/6K1").unwrap();
        assert_eq!(status(&mut board, Color::Black), GameStatus::Check);
        assert!(!GameStatus::Check.is_over());
    }

    #[test]
    fn stalemate() {
        let mut board = Board::from_placement("7k/5Q2/6K1/8/8/8/8/8").unwrap();
        assert!(!has_legal_moves(&mut board, Color::Black));
        assert_eq!(status(&mut board, Color::Black), GameStatus::Stalemate);
    }

    #[test]
    fn castling_probe_restores_four_squares() {
        let start = Board::from_placement("4k3/8/8/8/8/8/8/R3K2R").unwrap();
        let mut board = start.clone();
        assert!(is_legal(&mut board, sq("e1"), sq("g1")));
        assert!(is_legal(&mut board, sq("e1"), sq("c1")));
        assert_eq!(board, start);
        assert!(!board.get(sq("e1")).unwrap().has_moved());
        assert!(!board.get(sq("h1")).unwrap().has_moved());
    }
}
