//! Board state: the 4x4 grid, the shift pass, and tile spawning.
//!
//! ## Cell
//!
//! One grid position: `Empty` or `Occupied(value)` where the value is a
//! power of two starting at 2. The only mutation that changes a value is a
//! merge, which doubles it, so the power-of-two invariant holds for the life
//! of the board.
//!
//! ## Board
//!
//! An owned, `Copy` array of 16 cells in row-major order. The interesting
//! operation is [`Board::shift`]: one compaction-and-merge pass over the
//! whole grid in one direction. Spawning picks uniformly over the empty
//! cells and writes a 2, or one time in ten a 4.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::direction::Direction;
use crate::rng::TileRng;

/// Cells per row and per column.
pub const SIDE: usize = 4;

/// Total cell count of the grid.
pub const CELL_COUNT: usize = SIDE * SIDE;

/// One spawn in this many is a 4 instead of a 2.
const FOUR_TILE_ODDS: u32 = 10;

/// A single grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// No tile here; a spawn target.
    #[default]
    Empty,
    /// A tile holding a power-of-two value, 2 or greater.
    Occupied(u32),
}

impl Cell {
    /// Whether this cell holds no tile.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The tile value, or `None` for an empty cell.
    #[must_use]
    pub const fn value(self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(value) => Some(value),
        }
    }
}

/// The 4x4 grid of cells, row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an all-empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Build a board from literal rows, with 0 meaning empty.
    ///
    /// Intended for tests and fixtures. Every non-zero value must be a power
    /// of two, 2 or greater.
    #[must_use]
    pub fn from_rows(rows: [[u32; SIDE]; SIDE]) -> Self {
        let mut board = Self::new();
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                if value != 0 {
                    assert!(
                        value >= 2 && value.is_power_of_two(),
                        "Tile values must be powers of two >= 2, got {value}"
                    );
                    board.cells[row * SIDE + col] = Cell::Occupied(value);
                }
            }
        }
        board
    }

    /// The cell at the given row and column.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(row < SIDE && col < SIDE);
        self.cells[row * SIDE + col]
    }

    /// All cells in row-major order, for rendering.
    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Flat indices of every empty cell, in row-major order.
    #[must_use]
    pub fn empty_positions(&self) -> SmallVec<[usize; CELL_COUNT]> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Sum of all tile values.
    ///
    /// Shifts preserve this; a spawn raises it by exactly 2 or 4.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.cells
            .iter()
            .filter_map(|cell| cell.value())
            .map(u64::from)
            .sum()
    }

    /// Spawn one tile into a uniformly chosen empty cell.
    ///
    /// The new tile is a 2, or a 4 one time in ten. Returns false, changing
    /// nothing, when the board is full; the session treats that as the end of
    /// the game.
    pub fn spawn_random_tile(&mut self, rng: &mut TileRng) -> bool {
        let empties = self.empty_positions();
        let Some(&index) = rng.choose(&empties) else {
            return false;
        };

        let value = if rng.one_in(FOUR_TILE_ODDS) { 4 } else { 2 };
        self.cells[index] = Cell::Occupied(value);
        true
    }

    /// One compaction-and-merge pass over the whole grid.
    ///
    /// Returns whether any cell changed value or position. Within each lane,
    /// tiles are processed from the target edge inward, so a tile already
    /// settled against the edge is never re-examined. Each tile merges at
    /// most once per pass: a cell doubled by a merge is sealed until the pass
    /// ends and later equal tiles settle behind it.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let mut changed = false;
        // Cells that already absorbed a merge this pass.
        let mut merged = [false; CELL_COUNT];

        for lane in 0..SIDE {
            let indices = direction.lane(lane);
            // The cell on the target edge has nowhere to go.
            for start in 1..SIDE {
                if self.cells[indices[start]].is_empty() {
                    continue;
                }
                let mut at = start;
                while at > 0 {
                    let here = indices[at];
                    let nearer = indices[at - 1];
                    match (self.cells[nearer], self.cells[here]) {
                        (Cell::Empty, tile) => {
                            self.cells[nearer] = tile;
                            self.cells[here] = Cell::Empty;
                            changed = true;
                            at -= 1;
                        }
                        (Cell::Occupied(a), Cell::Occupied(b)) if a == b && !merged[nearer] => {
                            self.cells[nearer] = Cell::Occupied(a * 2);
                            self.cells[here] = Cell::Empty;
                            merged[nearer] = true;
                            changed = true;
                            break;
                        }
                        _ => break,
                    }
                }
            }
        }

        changed
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "    _____________________________")?;
        for row in 0..SIDE {
            write!(f, "    |")?;
            for col in 0..SIDE {
                match self.get(row, col) {
                    Cell::Empty => write!(f, "      |")?,
                    Cell::Occupied(value) => write!(f, " {value:>4} |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "    |______|______|______|______|")?;
        }
        Ok(())
    }
}
