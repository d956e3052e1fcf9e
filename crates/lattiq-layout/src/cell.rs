//! Grid cells.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One cell of the processor grid.
///
/// Cells are the atomic unit of space; the derived `Ord` is ascending
/// `(x, y)` lexicographic, which is also the qubit-index order of a
/// floorplan's data sequence. Serializes as a `[x, y]` tuple.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct Cell {
    /// Column, from the left.
    pub x: u32,
    /// Row, from the bottom.
    pub y: u32,
}

impl Cell {
    /// Create a cell.
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// The cell one step to the right.
    #[inline]
    pub fn right(self) -> Cell {
        Cell::new(self.x + 1, self.y)
    }

    /// The cell one step up.
    #[inline]
    pub fn up(self) -> Cell {
        Cell::new(self.x, self.y + 1)
    }

    /// Chebyshev distance to another cell.
    pub fn chebyshev_distance(self, other: Cell) -> u32 {
        u32::max(self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    /// Manhattan distance to another cell.
    pub fn manhattan_distance(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl From<(u32, u32)> for Cell {
    fn from((x, y): (u32, u32)) -> Self {
        Cell { x, y }
    }
}

impl From<Cell> for (u32, u32) {
    fn from(cell: Cell) -> Self {
        (cell.x, cell.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
