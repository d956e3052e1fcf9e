//! Floorplan generation over a rectangular processor grid.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{LayoutError, LayoutResult};

/// A border edge that can be reserved as frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameEdge {
    /// Top row (`y == height - 1`).
    Top,
    /// Bottom row (`y == 0`).
    Bottom,
    /// Left column (`x == 0`).
    Left,
    /// Right column (`x == width - 1`).
    Right,
}

impl FrameEdge {
    /// Resolve an edge name.
    pub fn parse(name: &str) -> LayoutResult<FrameEdge> {
        match name {
            "top" => Ok(FrameEdge::Top),
            "bottom" => Ok(FrameEdge::Bottom),
            "left" => Ok(FrameEdge::Left),
            "right" => Ok(FrameEdge::Right),
            other => Err(LayoutError::UnknownFrameEdge(other.to_string())),
        }
    }

    /// The edge name.
    pub fn name(self) -> &'static str {
        match self {
            FrameEdge::Top => "top",
            FrameEdge::Bottom => "bottom",
            FrameEdge::Left => "left",
            FrameEdge::Right => "right",
        }
    }
}

impl FromStr for FrameEdge {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        FrameEdge::parse(s)
    }
}

impl fmt::Display for FrameEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tiling pattern selecting which interior cells may hold data qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// 2x2 blocks, one candidate per block (~25% density).
    Block25,
    /// 3x3 blocks, a 2x2 sub-region per block (~44% density).
    Block44,
    /// Every other interior column (~50% density).
    Stripe50,
    /// Two of every three interior columns (~66% density).
    Stripe66,
}

impl Pattern {
    /// Resolve a pattern name.
    pub fn parse(name: &str) -> LayoutResult<Pattern> {
        match name {
            "block25" => Ok(Pattern::Block25),
            "block44" => Ok(Pattern::Block44),
            "stripe50" => Ok(Pattern::Stripe50),
            "stripe66" => Ok(Pattern::Stripe66),
            other => Err(LayoutError::UnknownPattern(other.to_string())),
        }
    }

    /// The pattern name.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Block25 => "block25",
            Pattern::Block44 => "block44",
            Pattern::Stripe50 => "stripe50",
            Pattern::Stripe66 => "stripe66",
        }
    }

    /// Block dimensions and in-block candidate offsets, for the block
    /// patterns.
    fn block_shape(self) -> Option<(u32, u32, &'static [(u32, u32)])> {
        match self {
            Pattern::Block25 => Some((2, 2, &[(1, 0)])),
            Pattern::Block44 => Some((3, 3, &[(1, 0), (2, 0), (1, 1), (2, 1)])),
            Pattern::Stripe50 | Pattern::Stripe66 => None,
        }
    }

    /// Data capacity of a stripe pattern over `width` interior columns of
    /// height 1.
    fn stripe_capacity(self, width: u32) -> u32 {
        match self {
            Pattern::Stripe50 => (0..width).filter(|x| x % 2 == 0).count() as u32,
            Pattern::Stripe66 => (0..width).filter(|x| x % 3 < 2).count() as u32,
            Pattern::Block25 | Pattern::Block44 => 0,
        }
    }
}

impl FromStr for Pattern {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        Pattern::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for floorplan generation.
///
/// When `width` and `height` are both given, placement runs on that exact
/// grid. When only `width` is given, the height is derived from the
/// requested qubit count (a block25-density heuristic). When neither is
/// given, the minimal grid for the pattern is derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorplanConfig {
    /// Grid width, including frame columns.
    pub width: Option<u32>,
    /// Grid height, including frame rows.
    pub height: Option<u32>,
    /// Border edges reserved as frame.
    pub frame_edges: Vec<FrameEdge>,
    /// Number of data qubits to place.
    pub num_data_qubits: u32,
    /// Tiling pattern.
    pub pattern: Pattern,
}

impl FloorplanConfig {
    /// Create a size-free configuration with the default bottom+right
    /// frame.
    pub fn new(num_data_qubits: u32, pattern: Pattern) -> Self {
        Self {
            width: None,
            height: None,
            frame_edges: vec![FrameEdge::Bottom, FrameEdge::Right],
            num_data_qubits,
            pattern,
        }
    }

    /// Fix both grid dimensions.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Fix the width only; the height is derived.
    #[must_use]
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self.height = None;
        self
    }

    /// Set the frame edges.
    #[must_use]
    pub fn with_frame(mut self, edges: impl IntoIterator<Item = FrameEdge>) -> Self {
        self.frame_edges = edges.into_iter().collect();
        self
    }

    fn has_edge(&self, edge: FrameEdge) -> bool {
        self.frame_edges.contains(&edge)
    }
}

/// A generated qubit floorplan.
///
/// `frame`, `data`, and `ancilla` partition the `width x height` grid.
/// `data` is sorted ascending by `(x, y)`; the position of a cell in this
/// sequence is the index of the logical qubit it hosts, and every consumer
/// of the floorplan maps qubit index to coordinate through this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floorplan {
    width: u32,
    height: u32,
    frame: FxHashSet<Cell>,
    data: Vec<Cell>,
    ancilla: FxHashSet<Cell>,
    fill_rate: f64,
}

impl Floorplan {
    /// Generate a floorplan from a configuration.
    pub fn generate(config: &FloorplanConfig) -> LayoutResult<Floorplan> {
        if config.num_data_qubits == 0 {
            return Err(LayoutError::ZeroDataQubits);
        }
        match (config.width, config.height) {
            (Some(width), Some(height)) => Self::place(width, height, config),
            (Some(width), None) => {
                let height = derive_height(width, config)?;
                Self::place(width, height, config)
            }
            (None, None) => {
                let (width, height) = minimal_size(config)?;
                Self::place(width, height, config)
            }
            (None, Some(_)) => Err(LayoutError::HeightWithoutWidth),
        }
    }

    /// Run placement on a fixed grid.
    fn place(width: u32, height: u32, config: &FloorplanConfig) -> LayoutResult<Floorplan> {
        let requested = config.num_data_qubits;
        let pattern = config.pattern;

        let in_frame = |cell: Cell| {
            (config.has_edge(FrameEdge::Left) && cell.x == 0)
                || (config.has_edge(FrameEdge::Right) && cell.x + 1 == width)
                || (config.has_edge(FrameEdge::Bottom) && cell.y == 0)
                || (config.has_edge(FrameEdge::Top) && cell.y + 1 == height)
        };

        let mut frame = FxHashSet::default();
        // Interior cells in (y, x) scan order: ascending row, then column.
        let mut interior = Vec::new();
        for y in 0..height {
            for x in 0..width {
                let cell = Cell::new(x, y);
                if in_frame(cell) {
                    frame.insert(cell);
                } else {
                    interior.push(cell);
                }
            }
        }

        let candidates = candidate_cells(pattern, &interior);
        if (candidates.len() as u32) < requested {
            return Err(LayoutError::InsufficientCapacity {
                pattern: pattern.name(),
                requested,
                available: candidates.len() as u32,
            });
        }

        // First `requested` candidates in scan order become data; the final
        // data sequence is re-sorted into (x, y) index order.
        let mut data: Vec<Cell> = candidates[..requested as usize].to_vec();
        data.sort();

        let chosen: FxHashSet<Cell> = data.iter().copied().collect();
        let ancilla: FxHashSet<Cell> = interior
            .iter()
            .copied()
            .filter(|cell| !chosen.contains(cell))
            .collect();

        let fill_rate = f64::from(requested) / f64::from(width * height);

        Ok(Floorplan {
            width,
            height,
            frame,
            data,
            ancilla,
            fill_rate,
        })
    }

    /// Grid width, frame included.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height, frame included.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Data cells, in qubit-index order.
    pub fn data_cells(&self) -> &[Cell] {
        &self.data
    }

    /// Home cell of the data qubit with the given index.
    pub fn data_cell(&self, index: usize) -> Option<Cell> {
        self.data.get(index).copied()
    }

    /// Number of data qubits.
    pub fn num_data_qubits(&self) -> u32 {
        self.data.len() as u32
    }

    /// Frame cells.
    pub fn frame_cells(&self) -> &FxHashSet<Cell> {
        &self.frame
    }

    /// Ancilla cells.
    pub fn ancilla_cells(&self) -> &FxHashSet<Cell> {
        &self.ancilla
    }

    /// Data-qubit count over total grid cells.
    pub fn fill_rate(&self) -> f64 {
        self.fill_rate
    }

    /// Whether the cell lies on the grid.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// Whether the cell holds a data qubit.
    pub fn is_data(&self, cell: Cell) -> bool {
        self.data.binary_search(&cell).is_ok()
    }

    /// Iterate over every grid cell in (y, x) scan order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

/// Enumerate pattern candidates over the interior, in the pattern's fixed
/// scan order.
fn candidate_cells(pattern: Pattern, interior: &[Cell]) -> Vec<Cell> {
    let Some(&first) = interior.first() else {
        return Vec::new();
    };
    let min_x = interior.iter().map(|c| c.x).min().unwrap_or(first.x);

    if let Some((block_w, block_h, offsets)) = pattern.block_shape() {
        let interior_set: FxHashSet<Cell> = interior.iter().copied().collect();
        let max_x = interior.iter().map(|c| c.x).max().unwrap_or(first.x);
        let min_y = interior.iter().map(|c| c.y).min().unwrap_or(first.y);
        let max_y = interior.iter().map(|c| c.y).max().unwrap_or(first.y);

        let mut candidates = Vec::new();
        let mut y_blk = min_y;
        while y_blk <= max_y {
            let mut x_blk = min_x;
            while x_blk <= max_x {
                for &(dx, dy) in offsets {
                    let cell = Cell::new(x_blk + dx, y_blk + dy);
                    if interior_set.contains(&cell) {
                        candidates.push(cell);
                    }
                }
                x_blk += block_w;
            }
            y_blk += block_h;
        }
        candidates.sort_by_key(|c| (c.y, c.x));
        candidates
    } else {
        // Stripes select interior-relative columns; the interior walk is
        // already in (y, x) order.
        let keep = |x: u32| match pattern {
            Pattern::Stripe50 => (x - min_x) % 2 == 0,
            Pattern::Stripe66 => (x - min_x) % 3 < 2,
            Pattern::Block25 | Pattern::Block44 => unreachable!(),
        };
        interior.iter().copied().filter(|c| keep(c.x)).collect()
    }
}

/// Minimal grid size hosting the requested qubits under the pattern.
fn minimal_size(config: &FloorplanConfig) -> LayoutResult<(u32, u32)> {
    let n = config.num_data_qubits;
    let (interior_w, interior_h) = match config.pattern {
        Pattern::Block25 => (2 * n, 2),
        Pattern::Block44 => (3 * n.div_ceil(4), 3),
        Pattern::Stripe50 => (2 * n, 1),
        Pattern::Stripe66 => {
            // Smallest width whose stripe capacity reaches n.
            let mut width = 0;
            while config.pattern.stripe_capacity(width) < n {
                width += 1;
            }
            (width, 1)
        }
    };

    let mut width = interior_w;
    let mut height = interior_h;
    if config.has_edge(FrameEdge::Left) {
        width += 1;
    }
    if config.has_edge(FrameEdge::Right) {
        width += 1;
    }
    if config.has_edge(FrameEdge::Bottom) {
        height += 1;
    }
    if config.has_edge(FrameEdge::Top) {
        height += 1;
    }
    Ok((width, height))
}

/// Derive a grid height for a fixed width, assuming block25 density.
fn derive_height(width: u32, config: &FloorplanConfig) -> LayoutResult<u32> {
    let mut interior_w = width;
    if config.has_edge(FrameEdge::Left) {
        interior_w = interior_w.saturating_sub(1);
    }
    if config.has_edge(FrameEdge::Right) {
        interior_w = interior_w.saturating_sub(1);
    }
    let blocks_per_row = interior_w.saturating_sub(1).div_ceil(2);
    if blocks_per_row == 0 {
        return Err(LayoutError::InsufficientCapacity {
            pattern: config.pattern.name(),
            requested: config.num_data_qubits,
            available: 0,
        });
    }

    let mut height = 2.0 * f64::from(config.num_data_qubits) / f64::from(blocks_per_row);
    if config.has_edge(FrameEdge::Bottom) {
        height += 1.0;
    }
    if config.has_edge(FrameEdge::Top) {
        height += 1.0;
    }
    Ok(height.ceil() as u32)
}
