//! Shift directions and their board traversal orders.
//!
//! A shift processes the grid one lane at a time: a lane is a single row or
//! column read from the target edge inward. [`Direction::lane`] produces the
//! flat cell indices of one lane in that order, which keeps the shift
//! algorithm itself direction-agnostic instead of four near-copies.

use serde::{Deserialize, Serialize};

use crate::board::SIDE;

/// One of the four shift directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, for iteration in tests and searches.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Flat indices of one lane, ordered from the target edge inward.
    ///
    /// For `Up` and `Down` a lane is a column; for `Left` and `Right` it is a
    /// row. `lane` must be below [`SIDE`].
    #[must_use]
    pub fn lane(self, lane: usize) -> [usize; SIDE] {
        assert!(lane < SIDE);
        std::array::from_fn(|step| match self {
            Direction::Up => step * SIDE + lane,
            Direction::Down => (SIDE - 1 - step) * SIDE + lane,
            Direction::Left => lane * SIDE + step,
            Direction::Right => lane * SIDE + (SIDE - 1 - step),
        })
    }
}
