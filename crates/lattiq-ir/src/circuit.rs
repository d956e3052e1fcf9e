//! High-level circuit builder and container.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::GateKind;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// An ordered gate-instruction stream over a fixed qubit count.
///
/// Instructions are immutable once read by downstream consumers; the
/// builder methods validate operands eagerly so a constructed circuit is
/// always well formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of logical qubits.
    pub num_qubits: u32,
    /// Instructions in program order.
    pub instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create an empty circuit with the given number of qubits.
    pub fn new(num_qubits: u32) -> Self {
        Self {
            num_qubits,
            instructions: vec![],
        }
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Whether the circuit has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Append an instruction, validating its name and operands.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        instruction.gate_kind()?;
        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitOutOfRange {
                    qubit,
                    num_qubits: self.num_qubits,
                });
            }
        }
        self.instructions.push(instruction);
        Ok(self)
    }

    /// Apply a single-qubit gate.
    pub fn apply(&mut self, kind: GateKind, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::new(kind, [qubit]))
    }

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(GateKind::H, qubit)
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(GateKind::X, qubit)
    }

    /// Apply T gate.
    pub fn t(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.apply(GateKind::T, qubit)
    }

    /// Apply a rotation around Z.
    pub fn rz(&mut self, angle: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::with_params(GateKind::Rz, [qubit], [angle]))
    }

    /// Apply CNOT.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::new(GateKind::CX, [control, target]))
    }

    /// Apply controlled-Z.
    pub fn cz(&mut self, q0: QubitId, q1: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::new(GateKind::CZ, [q0, q1]))
    }

    /// Measure one qubit.
    pub fn measure(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::measure(qubit))
    }

    /// Measure every qubit, in index order.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        for i in 0..self.num_qubits {
            self.measure(QubitId(i))?;
        }
        Ok(self)
    }

    /// Validate every instruction against the vocabulary and qubit count.
    ///
    /// Circuits built through [`Circuit::push`] are already valid; this is
    /// for circuits deserialized from an external feed.
    pub fn validate(&self) -> IrResult<()> {
        for instruction in &self.instructions {
            instruction.gate_kind()?;
            for &qubit in &instruction.qubits {
                if qubit.0 >= self.num_qubits {
                    return Err(IrError::QubitOutOfRange {
                        qubit,
                        num_qubits: self.num_qubits,
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse a circuit from JSON, validating the instruction stream.
    pub fn from_json(json: &str) -> IrResult<Circuit> {
        let circuit: Circuit = serde_json::from_str(json)?;
        circuit.validate()?;
        Ok(circuit)
    }

    /// Load a circuit from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> IrResult<Circuit> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the circuit to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> IrResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
