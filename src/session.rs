//! The game session: one live board, one undo slot, one RNG.
//!
//! ## Turn machine
//!
//! A turn proceeds: [`GameSession::begin_turn`] spawns the tile for this turn
//! (unless one was already spawned and nothing has moved since) or reports
//! that the game is over; the shell renders and reads one command; then
//! [`GameSession::dispatch`] routes it. The loop is owned by the shell; the
//! session holds no intermediate state beyond its four fields.
//!
//! ## Undo
//!
//! The backup board holds the state as it stood before the last move that
//! changed tiles. Reverting copies it back and nothing else, so the undo is
//! exactly one level deep.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::command::Command;
use crate::direction::Direction;
use crate::rng::TileRng;

/// What [`GameSession::begin_turn`] found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnStatus {
    /// A tile for this turn exists; play continues.
    Playing,
    /// No empty cell remained to spawn into; the game has ended.
    GameOver,
}

/// Whether the session continues after a dispatched command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Flow {
    Continue,
    Quit,
}

/// One live game.
#[derive(Clone, Debug)]
pub struct GameSession {
    current: Board,
    backup: Board,
    spawn_locked: bool,
    rng: TileRng,
}

impl GameSession {
    /// Start a session with a fresh entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(TileRng::from_entropy())
    }

    /// Start a session from an explicit seed.
    ///
    /// Two sessions with the same seed, fed the same commands, play the same
    /// game.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(TileRng::new(seed))
    }

    /// Start a session with a caller-built generator.
    #[must_use]
    pub fn with_rng(rng: TileRng) -> Self {
        let mut session = Self {
            current: Board::new(),
            backup: Board::new(),
            spawn_locked: false,
            rng,
        };
        session.deal();
        session
    }

    /// The seed this session's games derive from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// The live board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.current
    }

    /// Reset to a freshly dealt game, reusing the session's RNG stream.
    fn deal(&mut self) {
        self.current = Board::new();
        self.current.spawn_random_tile(&mut self.rng);
        self.spawn_locked = false;
        self.backup = self.current;
    }

    /// Open a turn: spawn this turn's tile, or report the end of the game.
    ///
    /// Game over means no empty cell remained at the start of the turn, even
    /// if a merge could still free one. When the spawn lock is held the tile
    /// for this turn already exists and the board is left alone. The
    /// full-board check runs before the lock check.
    pub fn begin_turn(&mut self) -> TurnStatus {
        if self.current.count_empty() == 0 {
            return TurnStatus::GameOver;
        }
        if !self.spawn_locked {
            self.current.spawn_random_tile(&mut self.rng);
            self.spawn_locked = true;
        }
        TurnStatus::Playing
    }

    /// Shift the board, keeping the undo slot and spawn lock in step.
    ///
    /// On a move that changes tiles, the pre-move board becomes the undo
    /// state and the spawn lock opens for the next turn. A move that changes
    /// nothing leaves every field alone, so the undo slot still points at the
    /// last real move. Returns whether the board changed.
    pub fn apply_direction(&mut self, direction: Direction) -> bool {
        let snapshot = self.current;
        let changed = self.current.shift(direction);
        if changed {
            self.backup = snapshot;
            self.spawn_locked = false;
        }
        changed
    }

    /// Restore the board as it stood before the last tile-altering move.
    ///
    /// One level only: the undo slot is not re-snapshotted, so reverting
    /// twice in a row lands on the same board both times. The spawn lock is
    /// untouched; a tile spawned this turn disappears with the revert and
    /// does not come back until a real move unlocks spawning again.
    pub fn revert(&mut self) {
        self.current = self.backup;
    }

    /// Deal a fresh game, or change nothing at all when declined.
    pub fn restart(&mut self, confirmed: bool) {
        if confirmed {
            self.deal();
        }
    }

    /// Signal termination when confirmed; a decline changes nothing.
    #[must_use]
    pub fn exit(&self, confirmed: bool) -> bool {
        confirmed
    }

    /// Route one command, reporting whether the session continues.
    pub fn dispatch(&mut self, command: Command, confirmed: bool) -> Flow {
        match command {
            Command::Shift(direction) => {
                self.apply_direction(direction);
                Flow::Continue
            }
            Command::Revert => {
                self.revert();
                Flow::Continue
            }
            Command::Restart => {
                self.restart(confirmed);
                Flow::Continue
            }
            Command::Exit => {
                if self.exit(confirmed) {
                    Flow::Quit
                } else {
                    Flow::Continue
                }
            }
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
