//! Terminal session errors.

use gambit_core::{BoardError, NotationError, PlacementError};

/// Errors that can occur while reading and handling player commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A move could not be parsed.
    #[error("invalid move \"{input}\": {source}")]
    InvalidMove {
        /// The text the player typed.
        input: String,
        /// Why it failed to parse.
        source: NotationError,
    },

    /// A square argument could not be parsed.
    #[error("invalid square \"{input}\": {source}")]
    InvalidSquare {
        /// The text the player typed.
        input: String,
        /// Why it failed to parse.
        source: NotationError,
    },

    /// A command is missing a required argument.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command that needs it.
        command: &'static str,
    },

    /// The placement diagram in a `position` command could not be parsed.
    #[error("invalid placement: {source}")]
    InvalidPlacement {
        /// The underlying parse error.
        #[from]
        source: PlacementError,
    },

    /// The position in a `position` command cannot occur in a game.
    #[error("invalid position: {source}")]
    InvalidBoard {
        /// The failed board check.
        #[from]
        source: BoardError,
    },

    /// The side to move is not `w` or `b`.
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The text found instead.
        found: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` gave a value the option does not accept.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
