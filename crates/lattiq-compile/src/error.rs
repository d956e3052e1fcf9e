//! Error types for the lattice-surgery compiler.

use lattiq_ir::{IrError, QubitId};
use lattiq_layout::Cell;
use thiserror::Error;

/// Errors that can occur during gate-to-surgery compilation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CompileError {
    /// Invalid instruction (unknown gate name, arity mismatch).
    #[error(transparent)]
    Ir(#[from] IrError),

    /// Operand index has no data cell on the floorplan.
    #[error("Qubit {qubit} has no data cell; floorplan hosts {num_data_qubits} qubits")]
    QubitUnassigned {
        /// The offending operand.
        qubit: QubitId,
        /// Data-qubit capacity of the floorplan.
        num_data_qubits: u32,
    },

    /// No path between the operands on the obstacle-pruned graph. This is
    /// a structural property of the floorplan and instruction combination;
    /// retrying cannot change the outcome.
    #[error("No route from {from} to {to} on the pruned qubit graph")]
    NoRoute {
        /// Home cell of the first operand.
        from: Cell,
        /// Home cell of the second operand.
        to: Cell,
    },
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;
