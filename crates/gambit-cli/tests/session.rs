//! End-to-end sessions: scripted input in, transcript out.

use std::io::Cursor;

use gambit_cli::Controller;
use gambit_core::Color;

struct Transcript {
    output: String,
    side_to_move: Color,
    board_placement: String,
}

fn run(input: &str) -> Transcript {
    let mut out = Vec::new();
    let mut controller = Controller::new(Cursor::new(input.to_string()), &mut out);
    controller.run().expect("session should not fail on in-memory I/O");
    let side_to_move = controller.game().side_to_move();
    let board_placement = controller.game().board().placement();
    drop(controller);
    Transcript {
        output: String::from_utf8(out).unwrap(),
        side_to_move,
        board_placement,
    }
}

#[test]
fn fools_mate_is_announced() {
    let t = run("f2f3\ne7e5\ng2g4\nd8h4\n");
    assert!(t.output.contains("Checkmate! Black wins!"));
    assert_eq!(t.side_to_move, Color::White);
}

#[test]
fn no_moves_after_checkmate() {
    let t = run("f2f3\ne7e5\ng2g4\nd8h4\na2a3\n");
    assert!(t.output.contains("Illegal move: the game is over."));
    assert_eq!(t.board_placement, "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR");
}

#[test]
fn new_game_after_checkmate() {
    let t = run("f2f3\ne7e5\ng2g4\nd8h4\nnew\ne2e4\n");
    assert_eq!(t.side_to_move, Color::Black);
    assert_eq!(
        t.board_placement,
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
    );
}

#[test]
fn check_is_announced() {
    let t = run("e2e4\nf7f6\nd1h5\n");
    assert!(t.output.contains("Black is in check!"));
}

#[test]
fn hints_name_the_checker() {
    let t = run("set hints on\ne2e4\nf7f6\nd1h5\n");
    assert!(t.output.contains("Black is in check! (from h5)"));
}

#[test]
fn stalemate_is_announced() {
    let t = run("position 7k/8/6K1/8/8/8/5Q2/8 w\nf2f7\n");
    assert!(t.output.contains("Stalemate! It's a draw!"));
}

#[test]
fn promotion_prompt_repeats_until_valid() {
    let t = run("position 4k3/P7/8/8/8/8/8/4K3 w\nset board off\na7a8\nking\nx\nr\n");
    assert_eq!(t.output.matches("Promote to (q/r/b/n)? ").count(), 3);
    assert_eq!(t.output.matches("Choose q, r, b or n.").count(), 2);
    assert_eq!(t.board_placement, "R3k3/8/8/8/8/8/8/4K3");
    assert_eq!(t.side_to_move, Color::Black);
}

#[test]
fn promotion_given_up_front() {
    let t = run("position 4k3/P7/8/8/8/8/8/4K3 w\na7a8n\n");
    assert!(!t.output.contains("Promote to"));
    assert!(t.board_placement.starts_with('N'));
}

#[test]
fn promotion_abandoned_at_end_of_input() {
    let t = run("position 4k3/P7/8/8/8/8/8/4K3 w\na7a8\n");
    assert_eq!(t.board_placement, "4k3/P7/8/8/8/8/8/4K3");
    assert_eq!(t.side_to_move, Color::White);
}

#[test]
fn board_printing_can_be_turned_off() {
    let on = run("e2e4\n");
    let off = run("set board off\ne2e4\n");
    assert_eq!(on.output.matches("a  b  c").count(), 2);
    assert_eq!(off.output.matches("a  b  c").count(), 1);
}

#[test]
fn invalid_position_is_rejected() {
    let t = run("position 8/8/8/8/8/8/8/8\n");
    assert!(t.output.contains("invalid position"));
    assert_eq!(
        t.board_placement,
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    );
}

#[test]
fn position_with_waiting_side_in_check_is_rejected() {
    let t = run("position 4k3/8/8/8/8/8/8/4R1K1 w\ne1e8\n");
    assert!(t.output.contains("invalid position: Black is in check"));
    assert!(!t.output.contains("Stalemate"));
    assert_eq!(t.board_placement, "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR");
    assert_eq!(t.side_to_move, Color::White);
}
