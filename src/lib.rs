//! # twenty48
//!
//! A single-player 4x4 sliding-tile merge puzzle: shift tiles, merge equal
//! pairs into their double, and survive until the grid fills up.
//!
//! ## Design Principles
//!
//! 1. **Silent core**: The engine never touches a terminal. It mutates
//!    in-memory state and hands the shell a grid snapshot to render.
//!
//! 2. **Explicit sessions**: All game state lives in an owned
//!    [`GameSession`] value. No globals, so tests run sessions side by side.
//!
//! 3. **Deterministic randomness**: Every spawn flows through [`TileRng`],
//!    seeded once per session. Seeded sessions replay identically.
//!
//! ## Modules
//!
//! - `board`: cells, the 4x4 grid, the shift pass, tile spawning
//! - `direction`: the four shift directions and their traversal orders
//! - `command`: the seven-command player vocabulary
//! - `session`: the turn state machine with one-level undo
//! - `rng`: the ChaCha8-backed deterministic generator
//!
//! ## Example
//!
//! ```
//! use twenty48::{Command, Direction, Flow, GameSession, TurnStatus};
//!
//! let mut session = GameSession::with_seed(42);
//! assert_eq!(session.begin_turn(), TurnStatus::Playing);
//!
//! session.apply_direction(Direction::Left);
//! session.revert();
//!
//! assert_eq!(session.dispatch(Command::Exit, true), Flow::Quit);
//! ```

pub mod board;
pub mod command;
pub mod direction;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use crate::board::{Board, Cell, CELL_COUNT, SIDE};
pub use crate::command::Command;
pub use crate::direction::Direction;
pub use crate::rng::TileRng;
pub use crate::session::{Flow, GameSession, TurnStatus};
