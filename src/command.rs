//! The player-facing command vocabulary.
//!
//! Seven commands reach the session: the four shifts plus revert, restart,
//! and exit. The shell reads single keys and maps them here; the session
//! never sees raw input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// One player intent, dispatched once per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Shift the whole board in one direction.
    Shift(Direction),
    /// Restore the board as it stood before the last tile-altering move.
    Revert,
    /// Throw the game away and deal a fresh board.
    Restart,
    /// Leave the game.
    Exit,
}

impl Command {
    /// Map one keystroke to a command, ignoring case.
    ///
    /// The bindings are `w`/`a`/`s`/`d` for up/left/down/right, `r` to
    /// revert, `x` to restart, and `e` to exit. Anything else is `None`.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'w' => Some(Command::Shift(Direction::Up)),
            'a' => Some(Command::Shift(Direction::Left)),
            's' => Some(Command::Shift(Direction::Down)),
            'd' => Some(Command::Shift(Direction::Right)),
            'r' => Some(Command::Revert),
            'x' => Some(Command::Restart),
            'e' => Some(Command::Exit),
            _ => None,
        }
    }

    /// Whether the shell must ask before dispatching this command.
    ///
    /// True exactly for the commands that discard progress.
    #[must_use]
    pub const fn needs_confirmation(self) -> bool {
        matches!(self, Command::Restart | Command::Exit)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Command::Shift(Direction::Up) => "swipe up",
            Command::Shift(Direction::Down) => "swipe down",
            Command::Shift(Direction::Left) => "swipe left",
            Command::Shift(Direction::Right) => "swipe right",
            Command::Revert => "revert",
            Command::Restart => "restart",
            Command::Exit => "exit",
        };
        f.write_str(label)
    }
}
