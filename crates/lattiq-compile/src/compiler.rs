//! Lowering gate instructions to lattice-surgery records.

use rustc_hash::FxHashSet;
use tracing::debug;

use lattiq_ir::{GateKind, Instruction, QubitId};
use lattiq_layout::{Cell, Floorplan, QubitGraph};

use crate::error::{CompileError, CompileResult};
use crate::routing::shortest_path;
use crate::surgery::{SurgeryKind, SurgeryOp};

/// How two-qubit routes treat the home cells of uninvolved data qubits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutingPolicy {
    /// Prune every other data qubit's home cell before the path search, so
    /// a route never crosses unrelated logical state.
    #[default]
    AvoidDataQubits,
    /// Route on the full graph. Reproduces the legacy behavior that
    /// ignores other live qubits as obstacles.
    Direct,
}

/// Compiles gate instructions against a fixed floorplan and graph.
///
/// Stateless across instructions; the same compiler can serve many
/// circuits against one device layout, including concurrently.
pub struct SurgeryCompiler<'a> {
    floorplan: &'a Floorplan,
    graph: &'a QubitGraph,
    policy: RoutingPolicy,
}

impl<'a> SurgeryCompiler<'a> {
    /// Create a compiler with the default obstacle-avoiding policy.
    pub fn new(floorplan: &'a Floorplan, graph: &'a QubitGraph) -> Self {
        Self {
            floorplan,
            graph,
            policy: RoutingPolicy::AvoidDataQubits,
        }
    }

    /// Set the routing policy.
    #[must_use]
    pub fn with_policy(mut self, policy: RoutingPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Lower a full instruction stream, in order.
    pub fn compile(&self, instructions: &[Instruction]) -> CompileResult<Vec<SurgeryOp>> {
        instructions.iter().map(|inst| self.lower(inst)).collect()
    }

    /// Lower one instruction.
    pub fn lower(&self, instruction: &Instruction) -> CompileResult<SurgeryOp> {
        let kind = instruction.gate_kind()?;
        let op = match kind {
            GateKind::Measure => {
                let qubit = instruction.qubits[0];
                SurgeryOp::single(SurgeryKind::Measure, self.home_cell(qubit)?, qubit)
            }
            kind if kind.num_qubits() == 1 => {
                let qubit = instruction.qubits[0];
                SurgeryOp::single(SurgeryKind::OneQubit, self.home_cell(qubit)?, qubit)
            }
            _ => self.route(instruction.qubits[0], instruction.qubits[1])?,
        };
        debug!(
            operation = instruction.operation.as_str(),
            kind = op.kind.name(),
            footprint = op.footprint.len(),
            "lowered instruction"
        );
        Ok(op)
    }

    /// Home cell of a logical qubit.
    fn home_cell(&self, qubit: QubitId) -> CompileResult<Cell> {
        self.floorplan
            .data_cell(qubit.index())
            .ok_or(CompileError::QubitUnassigned {
                qubit,
                num_data_qubits: self.floorplan.num_data_qubits(),
            })
    }

    /// Route a two-qubit interaction between operand home cells.
    fn route(&self, q0: QubitId, q1: QubitId) -> CompileResult<SurgeryOp> {
        let from = self.home_cell(q0)?;
        let to = self.home_cell(q1)?;

        let blocked: FxHashSet<Cell> = match self.policy {
            RoutingPolicy::AvoidDataQubits => self
                .floorplan
                .data_cells()
                .iter()
                .copied()
                .filter(|&cell| cell != from && cell != to)
                .collect(),
            RoutingPolicy::Direct => FxHashSet::default(),
        };

        let path = shortest_path(self.graph, from, to, &blocked)
            .ok_or(CompileError::NoRoute { from, to })?;
        Ok(SurgeryOp::routed(path, [q0, q1]))
    }
}
