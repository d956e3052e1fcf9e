//! Seeded random-circuit generation for experiment workloads.

use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::circuit::Circuit;
use crate::error::IrResult;
use crate::gate::GateKind;
use crate::instruction::Instruction;
use crate::qubit::QubitId;

/// Configuration for random circuit generation.
///
/// Each of the `depth` layers shuffles the qubits and walks them left to
/// right, emitting a two-qubit gate on a pair or a single-qubit gate on one
/// qubit. The result is deterministic for a fixed seed.
#[derive(Debug, Clone)]
pub struct RandomCircuit {
    /// Number of logical qubits.
    pub num_qubits: u32,
    /// Number of gate layers.
    pub depth: u32,
    /// Measure every qubit at the end.
    pub measure: bool,
    /// RNG seed.
    pub seed: u64,
}

impl RandomCircuit {
    /// Create a generator with measurement enabled and seed 0.
    pub fn new(num_qubits: u32, depth: u32) -> Self {
        Self {
            num_qubits,
            depth,
            measure: true,
            seed: 0,
        }
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable the trailing measure-all.
    #[must_use]
    pub fn with_measure(mut self, measure: bool) -> Self {
        self.measure = measure;
        self
    }

    /// Generate the circuit.
    pub fn generate(&self) -> IrResult<Circuit> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut circuit = Circuit::new(self.num_qubits);

        for _ in 0..self.depth {
            let mut order: Vec<u32> = (0..self.num_qubits).collect();
            order.shuffle(&mut rng);

            let mut slot = order.as_slice();
            while !slot.is_empty() {
                if slot.len() >= 2 && rng.gen_bool(0.5) {
                    let kind = GateKind::TWO_QUBIT[rng.gen_range(0..GateKind::TWO_QUBIT.len())];
                    circuit.push(Instruction::new(
                        kind,
                        [QubitId(slot[0]), QubitId(slot[1])],
                    ))?;
                    slot = &slot[2..];
                } else {
                    let kind =
                        GateKind::SINGLE_QUBIT[rng.gen_range(0..GateKind::SINGLE_QUBIT.len())];
                    let params: Vec<f64> = (0..kind.num_params())
                        .map(|_| rng.gen_range(0.0..2.0 * PI))
                        .collect();
                    circuit.push(Instruction::with_params(kind, [QubitId(slot[0])], params))?;
                    slot = &slot[1..];
                }
            }
        }

        if self.measure {
            circuit.measure_all()?;
        }
        Ok(circuit)
    }
}
