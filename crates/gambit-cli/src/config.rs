//! Session options adjustable with `set`.

/// Display options for a terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every accepted move.
    pub show_board: bool,
    /// Name the checking pieces when announcing check.
    pub show_checkers: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            show_checkers: false,
        }
    }
}

/// A single `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// `set board on|off`
    Board(bool),
    /// `set hints on|off`
    Hints(bool),
}

impl SessionConfig {
    /// Apply an option change.
    pub fn apply(&mut self, option: SessionOption) {
        match option {
            SessionOption::Board(on) => self.show_board = on,
            SessionOption::Hints(on) => self.show_checkers = on,
        }
    }
}
