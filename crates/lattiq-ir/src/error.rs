//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Operation name outside the recognized gate vocabulary.
    #[error("Unsupported gate '{0}'")]
    UnsupportedGate(String),

    /// Qubit operand does not exist in the circuit.
    #[error("Qubit {qubit} out of range for circuit with {num_qubits} qubits")]
    QubitOutOfRange {
        /// The offending operand.
        qubit: QubitId,
        /// Number of qubits in the circuit.
        num_qubits: u32,
    },

    /// Gate applied with the wrong number of operands.
    #[error("Gate '{gate}' requires {expected} qubits, got {got}")]
    ArityMismatch {
        /// Name of the gate.
        gate: &'static str,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// I/O failure while reading or writing a circuit file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed circuit JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
