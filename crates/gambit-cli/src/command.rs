//! Player command parsing.

use gambit_core::{Board, Color, Game, Move, Position};

use crate::config::SessionOption;
use crate::error::CliError;

/// A parsed player command.
#[derive(Debug)]
pub enum Command {
    /// `e2e4`, `e2 e4`, `a7a8q` -- play a move.
    Move(Move),
    /// `board` -- print the board.
    Board,
    /// `moves <square>` -- list legal destinations of a piece.
    Moves(Position),
    /// `new` -- restart from the standard position.
    New,
    /// `position <placement> [w|b]` -- load a position.
    Position(Game),
    /// `set <option> <on|off>` -- change a session option.
    Set(SessionOption),
    /// `help` -- list commands.
    Help,
    /// `quit` -- leave the session.
    Quit,
    /// Anything else.
    Unknown(String),
}

/// Parse a single line of player input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "board" => Ok(Command::Board),
        "new" => Ok(Command::New),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "moves" => parse_moves(&tokens[1..]),
        "position" => parse_position(&tokens[1..]),
        "set" => parse_set(&tokens[1..]),
        first if looks_like_move(first) => {
            let input = tokens.join(" ");
            Move::from_notation(&input)
                .map(Command::Move)
                .map_err(|source| CliError::InvalidMove { input, source })
        }
        other => Ok(Command::Unknown(other.to_string())),
    }
}

/// A move starts with a file letter and a rank digit.
fn looks_like_move(token: &str) -> bool {
    let bytes = token.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_lowercase() && bytes[1].is_ascii_digit()
}

fn parse_square(token: &str) -> Result<Position, CliError> {
    Position::from_notation(token).map_err(|source| CliError::InvalidSquare {
        input: token.to_string(),
        source,
    })
}

fn parse_moves(tokens: &[&str]) -> Result<Command, CliError> {
    let square = tokens
        .first()
        .ok_or(CliError::MissingArgument { command: "moves" })?;
    Ok(Command::Moves(parse_square(square)?))
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos`
/// - `position <placement> [w|b]` (White to move when omitted)
///
/// The position must be one a game can continue from: one king per side,
/// no pawns on the back ranks, and the side not on move not in check.
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    let placement = tokens
        .first()
        .ok_or(CliError::MissingArgument { command: "position" })?;

    let board = if *placement == "startpos" {
        Board::starting_position()
    } else {
        Board::from_placement(placement)?
    };

    let side_to_move = match tokens.get(1).copied() {
        None | Some("w") => Color::White,
        Some("b") => Color::Black,
        Some(other) => {
            return Err(CliError::InvalidSide {
                found: other.to_string(),
            });
        }
    };

    Ok(Command::Position(Game::from_board(board, side_to_move)?))
}

fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let (Some(&name), Some(&value)) = (tokens.first(), tokens.get(1)) else {
        return Err(CliError::MissingArgument { command: "set" });
    };

    let on = match value {
        "on" | "true" => true,
        "off" | "false" => false,
        _ => {
            return Err(CliError::InvalidOptionValue {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
    };

    match name {
        "board" => Ok(Command::Set(SessionOption::Board(on))),
        "hints" => Ok(Command::Set(SessionOption::Hints(on))),
        _ => Err(CliError::UnknownOption {
            name: name.to_string(),
        }),
    }
}
