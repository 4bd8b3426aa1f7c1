//! Turn-driving loop: reads player commands, plays moves, reports results.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use gambit_core::{Game, GameStatus, Move, MoveError, Position, PromotionPiece, check};

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::error::CliError;

const HELP: &str = "\
commands:
  e2e4 | e2 e4 | a7a8q   play a move (promotion letter optional)
  moves <square>         list legal destinations of a piece
  board                  print the board
  new                    start a new game
  position <diagram> [w|b]  load a placement diagram
  set board|hints on|off change display options
  help                   show this text
  quit                   leave";

/// A terminal chess session over any line reader and writer.
pub struct Controller<R, W> {
    input: R,
    output: W,
    game: Game,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Controller<R, W> {
    /// Create a session with a new game.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            game: Game::new(),
            config: SessionConfig::default(),
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current display options.
    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the session until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), CliError> {
        info!("session started");
        self.print_board()?;

        loop {
            self.prompt()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            if line.is_empty() {
                continue;
            }
            debug!(cmd = %line, "received command");

            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.handle(cmd)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(self.output, "{e}")?;
                }
            }
        }

        info!("session ended");
        Ok(())
    }

    fn handle(&mut self, cmd: Command) -> Result<(), CliError> {
        match cmd {
            Command::Move(mv) => self.handle_move(mv),
            Command::Board => self.print_board(),
            Command::Moves(from) => self.handle_moves(from),
            Command::New => {
                self.game = Game::new();
                self.print_board()
            }
            Command::Position(game) => {
                self.game = game;
                self.print_board()?;
                self.report_status()
            }
            Command::Set(option) => {
                self.config.apply(option);
                debug!(config = ?self.config, "session option changed");
                Ok(())
            }
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                Ok(())
            }
            Command::Unknown(word) => {
                writeln!(self.output, "Unknown command: {word}. Type 'help'.")?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn handle_move(&mut self, mut mv: Move) -> Result<(), CliError> {
        let mover = self.game.side_to_move();
        let mut result = self.game.play(mv);
        if result == Err(MoveError::PromotionRequired) {
            let Some(choice) = self.ask_promotion()? else {
                return Ok(());
            };
            mv.promotion = Some(choice);
            result = self.game.play(mv);
        }

        match result {
            Ok(status) => {
                if self.config.show_board {
                    self.print_board()?;
                }
                if status == GameStatus::Checkmate {
                    writeln!(self.output, "Checkmate! {} wins!", mover.name())?;
                } else {
                    self.report_status()?;
                }
            }
            Err(MoveError::NoPiece | MoveError::WrongTurn) => {
                writeln!(self.output, "Select your own piece!")?;
            }
            Err(e @ MoveError::GameOver) => {
                writeln!(self.output, "Illegal move: {e}. Type 'new' to play again.")?;
            }
            Err(e) => {
                writeln!(self.output, "Illegal move: {e}.")?;
            }
        }
        Ok(())
    }

    /// Ask until the player names a promotion piece. `None` on end of input.
    fn ask_promotion(&mut self) -> Result<Option<PromotionPiece>, CliError> {
        loop {
            write!(self.output, "Promote to (q/r/b/n)? ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let mut chars = line.chars();
            if let (Some(c), None) = (chars.next(), chars.next())
                && let Some(piece) = PromotionPiece::from_char(c)
            {
                return Ok(Some(piece));
            }
            writeln!(self.output, "Choose q, r, b or n.")?;
        }
    }

    fn handle_moves(&mut self, from: Position) -> Result<(), CliError> {
        if let Some(piece) = self.game.board().get(from)
            && piece.color() != self.game.side_to_move()
        {
            writeln!(self.output, "Select your own piece!")?;
            return Ok(());
        }
        let targets = self.game.legal_destinations(from);
        if targets.is_empty() {
            writeln!(self.output, "No legal moves from {from}.")?;
        } else {
            let list: Vec<String> = targets.iter().map(ToString::to_string).collect();
            writeln!(self.output, "{from}: {}", list.join(" "))?;
        }
        Ok(())
    }

    /// Announce check or stalemate for the side to move.
    fn report_status(&mut self) -> Result<(), CliError> {
        let side = self.game.side_to_move();
        match self.game.status() {
            GameStatus::Ongoing => {}
            GameStatus::Check => {
                write!(self.output, "{} is in check!", side.name())?;
                if self.config.show_checkers
                    && let Ok(attackers) = check::checkers(self.game.board(), side)
                {
                    let list: Vec<String> = attackers.iter().map(ToString::to_string).collect();
                    write!(self.output, " (from {})", list.join(", "))?;
                }
                writeln!(self.output)?;
            }
            GameStatus::Checkmate => {
                writeln!(self.output, "Checkmate! {} wins!", side.flip().name())?;
            }
            GameStatus::Stalemate => {
                writeln!(self.output, "Stalemate! It's a draw!")?;
            }
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "{}", self.game.board().pretty())?;
        Ok(())
    }

    fn prompt(&mut self) -> Result<(), CliError> {
        if !self.game.status().is_over() {
            write!(self.output, "{} to move: ", self.game.side_to_move().name())?;
        } else {
            write!(self.output, "> ")?;
        }
        self.output.flush()?;
        Ok(())
    }

    /// Read one trimmed line; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
