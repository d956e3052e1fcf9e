//! Lattiq Gate-Level Circuit Representation
//!
//! This crate provides the instruction-stream types consumed by the rest of
//! the Lattiq compilation stack. A circuit is an ordered list of gate
//! instructions over indexed logical qubits; the downstream compiler maps
//! those indices onto grid cells of a floorplan.
//!
//! # Overview
//!
//! - **Qubits**: [`QubitId`] addresses a logical qubit by its stable index.
//! - **Gates**: [`GateKind`] enumerates the recognized gate vocabulary
//!   (single-qubit, two-qubit, and `measure`).
//! - **Instructions**: [`Instruction`] is one operation in the external
//!   wire form `{"operation": ..., "qubits": [...], "params": [...]}`.
//! - **Circuits**: [`Circuit`] is an ordered instruction stream with
//!   builder helpers and JSON load/save.
//! - **Random circuits**: [`random::RandomCircuit`] generates seeded random
//!   workloads for experiment datasets.
//!
//! # Example
//!
//! ```rust
//! use lattiq_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::new(2);
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.len(), 4); // h, cx, measure, measure
//! ```

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;
pub mod random;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::GateKind;
pub use instruction::Instruction;
pub use qubit::QubitId;
pub use random::RandomCircuit;
