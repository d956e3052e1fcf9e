//! The 3-D occupancy volume.

use serde::{Deserialize, Serialize};
use std::fmt;

use lattiq_layout::Cell;

/// One occupancy event: a cell claimed during a time slice.
///
/// Serializes as a `[x, y, t]` tuple to match the harness wire format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(from = "(u32, u32, u32)", into = "(u32, u32, u32)")]
pub struct Coordinate {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
    /// Time slice.
    pub t: u32,
}

impl Coordinate {
    /// Create a coordinate.
    #[inline]
    pub fn new(x: u32, y: u32, t: u32) -> Self {
        Self { x, y, t }
    }

    /// Place a cell at a time slice.
    #[inline]
    pub fn at(cell: Cell, t: u32) -> Self {
        Self::new(cell.x, cell.y, t)
    }

    /// The spatial part.
    #[inline]
    pub fn cell(self) -> Cell {
        Cell::new(self.x, self.y)
    }
}

impl From<(u32, u32, u32)> for Coordinate {
    fn from((x, y, t): (u32, u32, u32)) -> Self {
        Self { x, y, t }
    }
}

impl From<Coordinate> for (u32, u32, u32) {
    fn from(c: Coordinate) -> Self {
        (c.x, c.y, c.t)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.t)
    }
}

/// An ordered list of occupancy events, one per (cell, slice) claim.
///
/// A valid polycube contains no duplicate coordinates; the scheduler
/// guarantees this by construction. Bounds are computed on demand rather
/// than stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polycube {
    blocks: Vec<Coordinate>,
}

impl Polycube {
    /// Create a polycube from its blocks.
    pub fn new(blocks: Vec<Coordinate>) -> Self {
        Self { blocks }
    }

    /// The occupancy events, in emission order.
    pub fn blocks(&self) -> &[Coordinate] {
        &self.blocks
    }

    /// Number of occupancy events.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Whether the polycube is empty.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Largest time slice touched, if any.
    pub fn max_t(&self) -> Option<u32> {
        self.blocks.iter().map(|b| b.t).max()
    }

    /// Number of time slices spanned.
    pub fn depth(&self) -> u32 {
        self.max_t().map_or(0, |t| t + 1)
    }

    /// Cells occupied during one slice, in emission order.
    pub fn slice(&self, t: u32) -> Vec<Cell> {
        self.blocks
            .iter()
            .filter(|b| b.t == t)
            .map(|b| b.cell())
            .collect()
    }
}

impl<const N: usize> From<[(u32, u32, u32); N]> for Polycube {
    fn from(blocks: [(u32, u32, u32); N]) -> Self {
        Self::new(blocks.into_iter().map(Coordinate::from).collect())
    }
}
