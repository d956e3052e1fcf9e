//! Circuit instructions in the external wire form.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::qubit::QubitId;

/// One operation from the circuit front-end.
///
/// Matches the feed format `{"operation": string, "qubits": [int],
/// "params": [float]}` produced by external front-ends. The operation name
/// is kept verbatim so unknown gates can be reported by name; use
/// [`Instruction::gate_kind`] to resolve it against the vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    /// Wire-format operation name (`"h"`, `"cx"`, `"measure"`, ...).
    pub operation: String,
    /// Qubit operands, in order.
    pub qubits: Vec<QubitId>,
    /// Angle parameters, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<f64>,
}

impl Instruction {
    /// Create an instruction from a recognized gate kind.
    pub fn new(kind: GateKind, qubits: impl IntoIterator<Item = QubitId>) -> Self {
        Self {
            operation: kind.name().to_string(),
            qubits: qubits.into_iter().collect(),
            params: vec![],
        }
    }

    /// Create a parameterized instruction.
    pub fn with_params(
        kind: GateKind,
        qubits: impl IntoIterator<Item = QubitId>,
        params: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            operation: kind.name().to_string(),
            qubits: qubits.into_iter().collect(),
            params: params.into_iter().collect(),
        }
    }

    /// Create a measurement instruction.
    pub fn measure(qubit: QubitId) -> Self {
        Self::new(GateKind::Measure, [qubit])
    }

    /// Resolve the operation name against the gate vocabulary.
    ///
    /// Fails with [`IrError::UnsupportedGate`] for names outside the
    /// whitelist, or [`IrError::ArityMismatch`] when the operand count does
    /// not match the gate.
    pub fn gate_kind(&self) -> IrResult<GateKind> {
        let kind = GateKind::parse(&self.operation)
            .ok_or_else(|| IrError::UnsupportedGate(self.operation.clone()))?;
        if self.qubits.len() != kind.num_qubits() as usize {
            return Err(IrError::ArityMismatch {
                gate: kind.name(),
                expected: kind.num_qubits(),
                got: self.qubits.len() as u32,
            });
        }
        Ok(kind)
    }
}
