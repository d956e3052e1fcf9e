//! Error types for floorplan generation.

use thiserror::Error;

/// Errors that can occur while generating a floorplan.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LayoutError {
    /// The pattern cannot host the requested number of data qubits on
    /// this grid. Fatal; the caller must choose a larger grid or a denser
    /// pattern.
    #[error(
        "Pattern '{pattern}' has {available} candidate cells, cannot place {requested} data qubits"
    )]
    InsufficientCapacity {
        /// Name of the tiling pattern.
        pattern: &'static str,
        /// Requested data-qubit count.
        requested: u32,
        /// Candidate cells actually available.
        available: u32,
    },

    /// Unsupported tiling pattern name.
    #[error("Unknown tiling pattern '{0}'")]
    UnknownPattern(String),

    /// Unsupported frame edge name.
    #[error("Unknown frame edge '{0}'")]
    UnknownFrameEdge(String),

    /// A floorplan must hold at least one data qubit.
    #[error("num_data_qubits must be positive")]
    ZeroDataQubits,

    /// Height was configured without a width to derive it from.
    #[error("Height given without width; give both dimensions or neither")]
    HeightWithoutWidth,
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
