//! The recognized gate vocabulary.

use serde::{Deserialize, Serialize};

/// A gate in the recognized vocabulary.
///
/// Rotation angles and other parameters travel on the instruction
/// (`params`), not on the gate kind; the compiler only needs the kind to
/// decide how an operation maps onto the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateKind {
    // Single-qubit gates
    /// Identity gate.
    I,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// Hadamard gate.
    H,
    /// S gate (sqrt(Z)).
    S,
    /// S-dagger gate.
    Sdg,
    /// T gate (fourth root of Z).
    T,
    /// T-dagger gate.
    Tdg,
    /// sqrt(X) gate.
    SX,
    /// Single-parameter phase gate.
    U1,
    /// Two-parameter single-qubit gate.
    U2,
    /// Universal single-qubit gate U(θ, φ, λ).
    U3,
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,

    // Two-qubit gates
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
    /// SWAP gate.
    Swap,
    /// iSWAP gate.
    ISwap,

    /// Measurement in the computational basis.
    Measure,
}

impl GateKind {
    /// All recognized single-qubit gates.
    pub const SINGLE_QUBIT: &'static [GateKind] = &[
        GateKind::I,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::H,
        GateKind::S,
        GateKind::Sdg,
        GateKind::T,
        GateKind::Tdg,
        GateKind::SX,
        GateKind::U1,
        GateKind::U2,
        GateKind::U3,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
    ];

    /// All recognized two-qubit gates.
    pub const TWO_QUBIT: &'static [GateKind] =
        &[GateKind::CX, GateKind::CZ, GateKind::Swap, GateKind::ISwap];

    /// Resolve a wire-format operation name. Returns `None` for names
    /// outside the vocabulary.
    pub fn parse(name: &str) -> Option<GateKind> {
        Some(match name {
            "id" => GateKind::I,
            "x" => GateKind::X,
            "y" => GateKind::Y,
            "z" => GateKind::Z,
            "h" => GateKind::H,
            "s" => GateKind::S,
            "sdg" => GateKind::Sdg,
            "t" => GateKind::T,
            "tdg" => GateKind::Tdg,
            "sx" => GateKind::SX,
            "u1" => GateKind::U1,
            "u2" => GateKind::U2,
            "u3" => GateKind::U3,
            "rx" => GateKind::Rx,
            "ry" => GateKind::Ry,
            "rz" => GateKind::Rz,
            "cx" => GateKind::CX,
            "cz" => GateKind::CZ,
            "swap" => GateKind::Swap,
            "iswap" => GateKind::ISwap,
            "measure" => GateKind::Measure,
            _ => return None,
        })
    }

    /// Get the wire-format name of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::I => "id",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::H => "h",
            GateKind::S => "s",
            GateKind::Sdg => "sdg",
            GateKind::T => "t",
            GateKind::Tdg => "tdg",
            GateKind::SX => "sx",
            GateKind::U1 => "u1",
            GateKind::U2 => "u2",
            GateKind::U3 => "u3",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
            GateKind::CX => "cx",
            GateKind::CZ => "cz",
            GateKind::Swap => "swap",
            GateKind::ISwap => "iswap",
            GateKind::Measure => "measure",
        }
    }

    /// Number of qubit operands this gate takes.
    #[inline]
    pub fn num_qubits(self) -> u32 {
        match self {
            GateKind::CX | GateKind::CZ | GateKind::Swap | GateKind::ISwap => 2,
            _ => 1,
        }
    }

    /// Number of angle parameters this gate takes.
    #[inline]
    pub fn num_params(self) -> u32 {
        match self {
            GateKind::U1 | GateKind::Rx | GateKind::Ry | GateKind::Rz => 1,
            GateKind::U2 => 2,
            GateKind::U3 => 3,
            _ => 0,
        }
    }

    /// Whether this is the measurement operation.
    #[inline]
    pub fn is_measure(self) -> bool {
        self == GateKind::Measure
    }
}
