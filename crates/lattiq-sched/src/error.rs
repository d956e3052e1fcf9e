//! Error types for scheduling and dataset I/O.

use lattiq_layout::Cell;
use thiserror::Error;

/// Errors that can occur while scheduling or writing datasets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SchedError {
    /// A surgery record arrived with no footprint cells.
    #[error("Surgery record has an empty footprint")]
    EmptyFootprint,

    /// A footprint cell lies outside the floorplan grid.
    #[error("Footprint cell {cell} is off the floorplan grid")]
    CellOffGrid {
        /// The offending cell.
        cell: Cell,
    },

    /// I/O failure while reading or writing a dataset file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed dataset JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scheduling operations.
pub type SchedResult<T> = Result<T, SchedError>;
