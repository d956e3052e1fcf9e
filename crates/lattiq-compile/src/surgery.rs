//! Lattice-surgery records.

use serde::{Deserialize, Serialize};

use lattiq_ir::QubitId;
use lattiq_layout::Cell;

/// The kind of a lattice-surgery operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurgeryKind {
    /// Single-qubit gate on one cell.
    #[serde(rename = "1Q")]
    OneQubit,
    /// Two-qubit interaction along a routed path.
    #[serde(rename = "2Q")]
    TwoQubit,
    /// Measurement on one cell.
    #[serde(rename = "M")]
    Measure,
}

impl SurgeryKind {
    /// Wire-format tag.
    pub fn name(self) -> &'static str {
        match self {
            SurgeryKind::OneQubit => "1Q",
            SurgeryKind::TwoQubit => "2Q",
            SurgeryKind::Measure => "M",
        }
    }
}

/// One gate instruction expressed in grid-cell terms.
///
/// The footprint has exactly one cell for [`SurgeryKind::OneQubit`] and
/// [`SurgeryKind::Measure`]; for [`SurgeryKind::TwoQubit`] it is the
/// routed path (at least two cells) between the operands' home cells.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeryOp {
    /// The operation kind.
    pub kind: SurgeryKind,
    /// Grid cells claimed by the operation, in path order.
    pub footprint: Vec<Cell>,
    /// Original qubit operands, in order.
    pub qubits: Vec<QubitId>,
}

impl SurgeryOp {
    /// Create a single-cell record.
    pub fn single(kind: SurgeryKind, cell: Cell, qubit: QubitId) -> Self {
        Self {
            kind,
            footprint: vec![cell],
            qubits: vec![qubit],
        }
    }

    /// Create a routed two-qubit record.
    pub fn routed(path: Vec<Cell>, qubits: [QubitId; 2]) -> Self {
        Self {
            kind: SurgeryKind::TwoQubit,
            footprint: path,
            qubits: qubits.to_vec(),
        }
    }

    /// Whether this record measures its qubit.
    pub fn is_measure(&self) -> bool {
        self.kind == SurgeryKind::Measure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags() {
        assert_eq!(SurgeryKind::OneQubit.name(), "1Q");
        assert_eq!(SurgeryKind::TwoQubit.name(), "2Q");
        assert_eq!(SurgeryKind::Measure.name(), "M");
        assert_eq!(serde_json::to_string(&SurgeryKind::Measure).unwrap(), "\"M\"");
    }

    #[test]
    fn test_record_shape() {
        let op = SurgeryOp::single(SurgeryKind::OneQubit, Cell::new(1, 1), QubitId(0));
        assert_eq!(op.footprint.len(), 1);
        assert!(!op.is_measure());

        let op = SurgeryOp::routed(
            vec![Cell::new(0, 0), Cell::new(1, 0)],
            [QubitId(0), QubitId(1)],
        );
        assert_eq!(op.footprint.len(), 2);
        assert_eq!(op.qubits.len(), 2);
    }
}
